use crate::defines::ZmqFd;

//  Opaque 0MQ socket handle. The pointer-sized value is owned by the
//  caller; this layer only carries it through a poll call and never
//  closes or dereferences it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZmqSocketHandle(usize);

impl ZmqSocketHandle {
    pub fn from_raw(raw: usize) -> Self {
        ZmqSocketHandle(raw)
    }

    pub fn as_raw(self) -> usize {
        self.0
    }
}

//  Mirrors zmq_pollitem_t: one scratch entry per polled socket. revents
//  is written by the wait primitive.
#[derive(Default, Debug, Clone)]
pub struct ZmqPollItem {
    pub socket: ZmqSocketHandle,
    pub fd: ZmqFd,
    pub events: i16,
    pub revents: i16,
}
