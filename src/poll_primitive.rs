use crate::defines::ZmqErrno;
use crate::poll_item::ZmqPollItem;

//  The blocking multiplexed wait the adapter marshals for. The production
//  implementation hands the poll set to libzmq; tests substitute scripted
//  outcomes.
pub trait ZmqPollPrimitive {
    //  Waits until at least one item is ready or the timeout expires.
    //  timeout is in milliseconds; -1 blocks indefinitely, 0 returns at
    //  once. Ok carries the number of items with non-zero revents and each
    //  item's revents has been written. Err carries the raw 0MQ error
    //  code; revents is unspecified on that path.
    fn wait(&mut self, items: &mut [ZmqPollItem], timeout: i64) -> Result<i32, ZmqErrno>;
}
