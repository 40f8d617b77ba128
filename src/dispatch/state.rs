use crate::dispatch::{DispatchError, DispatchPolicy, DispatchRequest};
use crate::framework::message::reply;
use crate::framework::{Response, SharedResource};
use crate::model::{BakerId, Order};
use std::collections::VecDeque;
use tracing::{debug, info};

type IdleBaker = Response<Result<Option<Order>, DispatchError>>;

/// The order queues plus the bakers parked on them.
///
/// Invariant: a queue and its idle list are never both non-empty.
pub struct Dispatch {
    policy: DispatchPolicy,
    bakers: usize,
    queues: Vec<VecDeque<Order>>,
    idle: Vec<VecDeque<IdleBaker>>,
    next_assigned: usize,
    closed: bool,
}

impl Dispatch {
    pub fn new(policy: DispatchPolicy, bakers: usize) -> Self {
        let queue_count = match policy {
            DispatchPolicy::Shared => 1,
            DispatchPolicy::Assigned => bakers,
        };
        Self {
            policy,
            bakers,
            queues: (0..queue_count).map(|_| VecDeque::new()).collect(),
            idle: (0..queue_count).map(|_| VecDeque::new()).collect(),
            next_assigned: 0,
            closed: false,
        }
    }

    pub fn pending(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    fn check_baker(&self, baker: BakerId) -> Result<(), DispatchError> {
        if baker.0 == 0 || baker.index() >= self.bakers {
            return Err(DispatchError::UnknownBaker(baker));
        }
        Ok(())
    }

    /// The queue a baker serves.
    fn queue_of(&self, baker: BakerId) -> Result<usize, DispatchError> {
        self.check_baker(baker)?;
        Ok(match self.policy {
            DispatchPolicy::Shared => 0,
            DispatchPolicy::Assigned => baker.index(),
        })
    }

    /// Picks the queue for a new order.
    fn route(&mut self, baker: Option<BakerId>) -> Result<(usize, Option<BakerId>), DispatchError> {
        match (self.policy, baker) {
            (DispatchPolicy::Shared, _) => Ok((0, None)),
            (DispatchPolicy::Assigned, Some(baker)) => {
                self.check_baker(baker)?;
                Ok((baker.index(), Some(baker)))
            }
            (DispatchPolicy::Assigned, None) => {
                let index = self.next_assigned % self.bakers;
                self.next_assigned += 1;
                Ok((index, Some(BakerId::from_index(index))))
            }
        }
    }

    /// Gives the order to a baker parked on `queue`, if any is still listening.
    /// Returns the order when nobody took it.
    fn hand_off(&mut self, queue: usize, mut order: Order) -> Option<Order> {
        while let Some(idle) = self.idle[queue].pop_front() {
            // A failed send hands back exactly the value that was sent.
            if let Err(Ok(Some(returned))) = idle.send(Ok(Some(order))) {
                order = returned;
            } else {
                return None;
            }
        }
        Some(order)
    }

    fn submit(
        &mut self,
        order: Order,
        baker: Option<BakerId>,
    ) -> Result<Option<BakerId>, DispatchError> {
        if self.closed {
            return Err(DispatchError::Closed);
        }
        let (queue, assigned) = self.route(baker)?;
        let customer = order.customer.clone();
        match self.hand_off(queue, order) {
            None => debug!(%customer, queue, "Order handed to idle baker"),
            Some(order) => {
                self.queues[queue].push_back(order);
                debug!(%customer, queue, depth = self.queues[queue].len(), "Order queued");
            }
        }
        Ok(assigned)
    }

    fn take(&mut self, baker: BakerId, respond_to: IdleBaker) {
        let queue = match self.queue_of(baker) {
            Ok(queue) => queue,
            Err(e) => return reply(respond_to, Err(e)),
        };
        if let Some(order) = self.queues[queue].pop_front() {
            debug!(%baker, customer = %order.customer, "Order taken");
            reply(respond_to, Ok(Some(order)));
        } else if self.closed {
            reply(respond_to, Ok(None));
        } else {
            self.idle[queue].push_back(respond_to);
        }
    }

    fn close(&mut self) {
        self.closed = true;
        let released: usize = self.idle.iter().map(VecDeque::len).sum();
        for idle in self.idle.iter_mut() {
            for respond_to in idle.drain(..) {
                reply(respond_to, Ok(None));
            }
        }
        info!(released, pending = self.pending(), "Dispatch closed");
    }
}

impl SharedResource for Dispatch {
    type Request = DispatchRequest;
    const NAME: &'static str = "Dispatch";

    fn handle(&mut self, request: DispatchRequest) {
        match request {
            DispatchRequest::Submit {
                order,
                baker,
                respond_to,
            } => {
                let result = self.submit(order, baker);
                reply(respond_to, result);
            }
            DispatchRequest::Take { baker, respond_to } => self.take(baker, respond_to),
            DispatchRequest::Close { respond_to } => {
                self.close();
                reply(respond_to, ());
            }
            DispatchRequest::Pending { respond_to } => reply(respond_to, self.pending()),
        }
    }

    fn parked(&self) -> usize {
        self.idle.iter().map(VecDeque::len).sum()
    }
}
