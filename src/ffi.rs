use std::ffi::c_void;

use libc::{c_int, c_long};

use crate::defines::{ZmqErrno, ZmqFd};
use crate::poll_item::ZmqPollItem;
use crate::poll_primitive::ZmqPollPrimitive;

//  C layout of zmq_pollitem_t from zmq.h.
#[repr(C)]
struct RawPollItem {
    socket: *mut c_void,
    fd: ZmqFd,
    events: i16,
    revents: i16,
}

#[link(name = "zmq")]
extern "C" {
    fn zmq_poll(items: *mut RawPollItem, nitems: c_int, timeout: c_long) -> c_int;
    fn zmq_errno() -> c_int;
}

//  Wait primitive backed by the linked libzmq.
#[derive(Default, Debug, Clone, Copy)]
pub struct LibzmqPrimitive;

impl ZmqPollPrimitive for LibzmqPrimitive {
    fn wait(&mut self, items: &mut [ZmqPollItem], timeout: i64) -> Result<i32, ZmqErrno> {
        let mut raw: Vec<RawPollItem> = items
            .iter()
            .map(|item| RawPollItem {
                socket: item.socket.as_raw() as *mut c_void,
                fd: item.fd,
                events: item.events,
                revents: 0,
            })
            .collect();

        let rc = unsafe { zmq_poll(raw.as_mut_ptr(), raw.len() as c_int, timeout as c_long) };
        if rc < 0 {
            return Err(unsafe { zmq_errno() } as ZmqErrno);
        }

        for (item, raw_item) in items.iter_mut().zip(raw.iter()) {
            item.revents = raw_item.revents;
        }
        Ok(rc)
    }
}
