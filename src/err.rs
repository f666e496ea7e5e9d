use libc::{EFAULT, EINTR};

use crate::defines::{ZmqErrno, ETERM};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(&'static str),
    #[error("poll items must have 'socket' and 'events' fields")]
    MissingFields(&'static str),
    #[error("invalid field in poll item {0}")]
    InvalidField(usize),
    #[error("at least one socket's context was terminated")]
    ContextTerminated,
    #[error("poll items array is not valid")]
    InvalidItems,
    #[error("poll operation was interrupted")]
    Interrupted,
    #[error("unknown polling error, code {0}")]
    Unknown(ZmqErrno),
}

impl PollError {
    //  Translates the raw code reported by the wait primitive.
    pub fn from_errno(raw: ZmqErrno) -> Self {
        match raw {
            ETERM => PollError::ContextTerminated,
            EFAULT => PollError::InvalidItems,
            EINTR => PollError::Interrupted,
            _ => {
                log::warn!("unmapped poll error code {}", raw);
                PollError::Unknown(raw)
            }
        }
    }
}

//  Envelope bytes that fail to decode never reach per-item validation.
impl From<bincode::Error> for PollError {
    fn from(_: bincode::Error) -> Self {
        PollError::InvalidArguments("malformed call envelope")
    }
}
