use crate::err::PollError;
use crate::poll_item::ZmqPollItem;
use crate::poll_primitive::ZmqPollPrimitive;
use crate::pollset::{ZmqPollReady, ZmqPollRequest, ZmqPollResponse};

// Polling.

//  Runs one blocking multiplexed wait over the request's poll set. The
//  response has the same length and order as the request, with each
//  socket echoed unchanged; ready_count is the primitive's return value.
//  On failure no response is produced at all.
pub fn zmq_poll(
    primitive: &mut impl ZmqPollPrimitive,
    request: &ZmqPollRequest,
) -> Result<ZmqPollResponse, PollError> {
    //  Scratch poll set handed to the wait primitive. Lives for this call
    //  only and drops on every exit path.
    let mut items: Vec<ZmqPollItem> = vec![ZmqPollItem::default(); request.items.len()];

    for (item, entry) in items.iter_mut().zip(request.items.iter()) {
        item.socket = entry.socket;
        item.events = entry.events;
        //  Polling on raw file descriptors is not supported; fd stays
        //  unused.
        item.fd = 0;
    }

    //  Wait for events. An empty poll set is legal and goes through to
    //  the primitive unchanged; timeout semantics for it belong there.
    let rc = primitive
        .wait(&mut items, request.timeout)
        .map_err(PollError::from_errno)?;

    //  Read observed readiness back into the caller's order.
    let ready: Vec<ZmqPollReady> = items
        .iter()
        .map(|item| ZmqPollReady {
            socket: item.socket,
            revents: item.revents,
        })
        .collect();

    Ok(ZmqPollResponse {
        items: ready,
        ready_count: rc,
    })
}
