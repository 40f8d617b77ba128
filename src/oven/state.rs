use crate::framework::message::reply;
use crate::framework::{Response, SharedResource};
use crate::oven::{OvenError, OvenRequest, OvenStatus};
use std::collections::VecDeque;
use tracing::{debug, warn};

struct PendingBatch {
    size: u32,
    respond_to: Response<Result<u32, OvenError>>,
}

/// The bounded oven. Invariant: `usage <= capacity` after every message.
pub struct Oven {
    capacity: u32,
    usage: u32,
    peak_usage: u32,
    batches_admitted: u64,
    waiting: VecDeque<PendingBatch>,
}

impl Oven {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            usage: 0,
            peak_usage: 0,
            batches_admitted: 0,
            waiting: VecDeque::new(),
        }
    }

    pub fn status(&self) -> OvenStatus {
        OvenStatus {
            capacity: self.capacity,
            usage: self.usage,
            peak_usage: self.peak_usage,
            batches_admitted: self.batches_admitted,
            waiting: self.waiting.len(),
        }
    }

    fn fits(&self, size: u32) -> bool {
        self.usage
            .checked_add(size)
            .is_some_and(|total| total <= self.capacity)
    }

    /// Moves `size` breads into the oven and answers the requester.
    ///
    /// If the requester already gave up, the space is handed back at once so
    /// an abandoned request cannot hold capacity.
    fn grant(&mut self, size: u32, respond_to: Response<Result<u32, OvenError>>) {
        self.usage += size;
        if respond_to.send(Ok(size)).is_err() {
            warn!(size, "Requester left before admission");
            self.usage -= size;
            return;
        }
        self.peak_usage = self.peak_usage.max(self.usage);
        self.batches_admitted += 1;
        debug!(size, usage = self.usage, capacity = self.capacity, "Batch admitted");
    }

    /// Re-checks every parked request, oldest first.
    fn admit_waiting(&mut self) {
        let mut still_waiting = VecDeque::with_capacity(self.waiting.len());
        while let Some(pending) = self.waiting.pop_front() {
            if pending.respond_to.is_closed() {
                continue;
            }
            if self.fits(pending.size) {
                self.grant(pending.size, pending.respond_to);
            } else {
                still_waiting.push_back(pending);
            }
        }
        self.waiting = still_waiting;
    }
}

impl SharedResource for Oven {
    type Request = OvenRequest;
    const NAME: &'static str = "Oven";

    fn handle(&mut self, request: OvenRequest) {
        match request {
            OvenRequest::Admit { size, respond_to } => {
                if size == 0 {
                    reply(respond_to, Err(OvenError::EmptyBatch));
                } else if size > self.capacity {
                    warn!(size, capacity = self.capacity, "Batch can never fit");
                    reply(
                        respond_to,
                        Err(OvenError::BatchTooLarge {
                            requested: size,
                            capacity: self.capacity,
                        }),
                    );
                } else if self.fits(size) {
                    self.grant(size, respond_to);
                } else {
                    debug!(size, usage = self.usage, "Batch waiting for space");
                    self.waiting.push_back(PendingBatch { size, respond_to });
                }
            }
            OvenRequest::Release { size, respond_to } => {
                if size > self.usage {
                    reply(
                        respond_to,
                        Err(OvenError::ReleaseExceedsUsage {
                            released: size,
                            usage: self.usage,
                        }),
                    );
                    return;
                }
                self.usage -= size;
                debug!(size, usage = self.usage, "Batch released");
                self.admit_waiting();
                reply(respond_to, Ok(()));
            }
            OvenRequest::Status { respond_to } => reply(respond_to, self.status()),
        }
    }

    fn parked(&self) -> usize {
        self.waiting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn admit(oven: &mut Oven, size: u32) -> oneshot::Receiver<Result<u32, OvenError>> {
        let (respond_to, rx) = oneshot::channel();
        oven.handle(OvenRequest::Admit { size, respond_to });
        rx
    }

    fn release(oven: &mut Oven, size: u32) -> Result<(), OvenError> {
        let (respond_to, mut rx) = oneshot::channel();
        oven.handle(OvenRequest::Release { size, respond_to });
        rx.try_recv().unwrap()
    }

    #[test]
    fn admits_up_to_capacity_then_parks() {
        let mut oven = Oven::new(10);
        assert_eq!(admit(&mut oven, 6).try_recv().unwrap(), Ok(6));
        assert_eq!(admit(&mut oven, 4).try_recv().unwrap(), Ok(4));

        let mut parked = admit(&mut oven, 1);
        assert!(parked.try_recv().is_err());
        assert_eq!(oven.status().usage, 10);
        assert_eq!(oven.status().waiting, 1);
    }

    #[test]
    fn release_admits_parked_batch_at_full_size() {
        let mut oven = Oven::new(10);
        admit(&mut oven, 8).try_recv().unwrap().unwrap();
        let mut parked = admit(&mut oven, 5);

        // Two breads of room is not enough; no partial grant.
        release(&mut oven, 1).unwrap();
        assert!(parked.try_recv().is_err());

        release(&mut oven, 7).unwrap();
        assert_eq!(parked.try_recv().unwrap(), Ok(5));
        assert_eq!(oven.status().usage, 5);
        assert_eq!(oven.status().peak_usage, 10);
    }

    #[test]
    fn later_small_batch_may_overtake_a_large_one() {
        let mut oven = Oven::new(10);
        admit(&mut oven, 10).try_recv().unwrap().unwrap();
        let mut large = admit(&mut oven, 9);
        let mut small = admit(&mut oven, 2);

        release(&mut oven, 3).unwrap();
        assert!(large.try_recv().is_err());
        assert_eq!(small.try_recv().unwrap(), Ok(2));
    }

    #[test]
    fn rejects_batches_that_can_never_fit() {
        let mut oven = Oven::new(10);
        assert_eq!(
            admit(&mut oven, 11).try_recv().unwrap(),
            Err(OvenError::BatchTooLarge { requested: 11, capacity: 10 })
        );
        assert_eq!(admit(&mut oven, 0).try_recv().unwrap(), Err(OvenError::EmptyBatch));
        assert_eq!(oven.status().waiting, 0);
    }

    #[test]
    fn rejects_release_beyond_usage() {
        let mut oven = Oven::new(10);
        admit(&mut oven, 3).try_recv().unwrap().unwrap();
        assert_eq!(
            release(&mut oven, 4),
            Err(OvenError::ReleaseExceedsUsage { released: 4, usage: 3 })
        );
        assert_eq!(oven.status().usage, 3);
    }

    #[test]
    fn abandoned_request_does_not_hold_capacity() {
        let mut oven = Oven::new(10);
        admit(&mut oven, 10).try_recv().unwrap().unwrap();
        drop(admit(&mut oven, 4));
        let mut live = admit(&mut oven, 10);

        release(&mut oven, 10).unwrap();
        assert_eq!(live.try_recv().unwrap(), Ok(10));
        assert_eq!(oven.status().usage, 10);
        assert_eq!(oven.status().waiting, 0);
    }

    #[test]
    fn huge_capacity_does_not_overflow() {
        let mut oven = Oven::new(u32::MAX);
        admit(&mut oven, u32::MAX - 1).try_recv().unwrap().unwrap();

        let mut parked = admit(&mut oven, 5);
        assert!(parked.try_recv().is_err());
        assert_eq!(oven.status().waiting, 1);

        release(&mut oven, u32::MAX - 1).unwrap();
        assert_eq!(parked.try_recv().unwrap(), Ok(5));
    }
}
