//  Event bits understood by the poll layer. These match the values from
//  zmq.h and may be OR-ed together in an item's events/revents fields.
pub const ZMQ_POLLIN: i16 = 1;
pub const ZMQ_POLLOUT: i16 = 2;
pub const ZMQ_POLLERR: i16 = 4;
pub const ZMQ_POLLPRI: i16 = 8;

//  0MQ-native error codes live above the OS errno range.
pub const ZMQ_HAUSNUMERO: i32 = 156384712;
pub const ETERM: i32 = ZMQ_HAUSNUMERO + 53;

//  Raw error code as reported by the underlying library.
pub type ZmqErrno = i32;

#[cfg(target_os = "windows")]
pub type ZmqFd = usize;
#[cfg(not(target_os = "windows"))]
pub type ZmqFd = i32;
