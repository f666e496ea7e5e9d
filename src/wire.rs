use serde::{Deserialize, Serialize};

use crate::err::PollError;
use crate::ops::zmq_poll;
use crate::poll_item::ZmqSocketHandle;
use crate::poll_primitive::ZmqPollPrimitive;
use crate::pollset::{ZmqPollEntry, ZmqPollRequest, ZmqPollResponse};

//  Call envelope for poll requests arriving as raw bytes. Mirrors a
//  positional invocation: args[0] is the poll item list, args[1] the
//  timeout scalar, nout the number of outputs the caller asked for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZmqWireCall {
    pub args: Vec<ZmqWireValue>,
    pub nout: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ZmqWireValue {
    Items(Vec<ZmqWireItem>),
    Scalar(i64),
}

//  Fields stay optional until validated: presence is a property of the
//  incoming message, not of the type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZmqWireItem {
    pub socket: Option<u64>,
    pub events: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZmqWireReady {
    pub socket: u64,
    pub revents: i16,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZmqWireReply {
    pub items: Vec<ZmqWireReady>,
    //  Present iff the caller asked for a second output. Always computed
    //  from the primitive's return value, never left unset.
    pub ready_count: Option<i32>,
}

pub fn decode_call(buf: &[u8]) -> Result<ZmqWireCall, PollError> {
    Ok(bincode::deserialize(buf)?)
}

pub fn encode_reply(reply: &ZmqWireReply) -> Result<Vec<u8>, PollError> {
    Ok(bincode::serialize(reply)?)
}

//  Validates and runs one boundary call. All validation happens before
//  the wait primitive is touched.
pub fn dispatch(
    primitive: &mut impl ZmqPollPrimitive,
    call: &ZmqWireCall,
) -> Result<ZmqWireReply, PollError> {
    if call.args.len() != 2 {
        return Err(PollError::InvalidArguments(
            "two inputs required: poll items and timeout",
        ));
    }
    if call.nout > 2 {
        return Err(PollError::InvalidArguments(
            "maximum of two outputs supported",
        ));
    }

    let (wire_items, timeout) = match (&call.args[0], &call.args[1]) {
        (ZmqWireValue::Items(items), ZmqWireValue::Scalar(timeout)) => (items, *timeout),
        (ZmqWireValue::Items(_), _) => {
            return Err(PollError::InvalidArguments("timeout must be a numeric scalar"))
        }
        _ => {
            return Err(PollError::InvalidArguments(
                "first argument must be a poll item list",
            ))
        }
    };

    let request = ZmqPollRequest {
        items: parse_poll_items(wire_items)?,
        timeout,
    };

    let response = zmq_poll(primitive, &request)?;
    Ok(create_reply(&response, call.nout))
}

fn parse_poll_items(items: &[ZmqWireItem]) -> Result<Vec<ZmqPollEntry>, PollError> {
    let mut entries = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let (socket, events) = match (item.socket, item.events) {
            (Some(socket), Some(events)) => (socket, events),
            _ => {
                return Err(PollError::MissingFields(
                    "poll items must have 'socket' and 'events' fields",
                ))
            }
        };
        //  Item indices are reported 1-based.
        let events = i16::try_from(events).map_err(|_| PollError::InvalidField(i + 1))?;
        let socket = usize::try_from(socket).map_err(|_| PollError::InvalidField(i + 1))?;
        entries.push(ZmqPollEntry {
            socket: ZmqSocketHandle::from_raw(socket),
            events,
        });
    }
    Ok(entries)
}

fn create_reply(response: &ZmqPollResponse, nout: u8) -> ZmqWireReply {
    let items = response
        .items
        .iter()
        .map(|ready| ZmqWireReady {
            socket: ready.socket.as_raw() as u64,
            revents: ready.revents,
        })
        .collect();

    let ready_count = if nout >= 2 {
        Some(response.ready_count)
    } else {
        None
    };

    ZmqWireReply { items, ready_count }
}
