pub mod defines;
pub mod err;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod ops;
pub mod poll_item;
pub mod poll_primitive;
pub mod pollset;
pub mod wire;

pub use crate::err::PollError;
pub use crate::ops::zmq_poll;
pub use crate::poll_item::{ZmqPollItem, ZmqSocketHandle};
pub use crate::poll_primitive::ZmqPollPrimitive;
pub use crate::pollset::{ZmqPollEntry, ZmqPollReady, ZmqPollRequest, ZmqPollResponse};
