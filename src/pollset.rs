use crate::poll_item::ZmqSocketHandle;

//  One entry of the poll set: which socket, and which readiness bits the
//  caller wants reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZmqPollEntry {
    pub socket: ZmqSocketHandle,
    pub events: i16,
}

//  Ordered poll set plus the wait bound in milliseconds (-1 infinite,
//  0 non-blocking). Order is significant: the response echoes it.
#[derive(Debug, Clone, Default)]
pub struct ZmqPollRequest {
    pub items: Vec<ZmqPollEntry>,
    pub timeout: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZmqPollReady {
    pub socket: ZmqSocketHandle,
    pub revents: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZmqPollResponse {
    pub items: Vec<ZmqPollReady>,
    pub ready_count: i32,
}
