use crate::framework::message::reply;
use crate::framework::{Response, SharedResource};
use crate::fulfillment::{StoreError, StoreRequest};
use crate::model::{Bread, CustomerId};
use std::collections::HashMap;
use tracing::{debug, info, warn};

type Pickup = Response<Result<Vec<Bread>, StoreError>>;

struct WaitingCustomer {
    quantity: u32,
    respond_to: Pickup,
}

/// Delivered breads per customer, plus the customers waiting for them.
///
/// Between opening and pickup a shelf only grows. It is emptied exactly once,
/// when its customer collects.
#[derive(Default)]
pub struct FulfillmentStore {
    /// Customers with an order in flight, and how many breads they ordered.
    active: HashMap<CustomerId, u32>,
    shelves: HashMap<CustomerId, Vec<Bread>>,
    waiting: HashMap<CustomerId, WaitingCustomer>,
}

impl FulfillmentStore {
    pub fn delivered(&self, customer: &CustomerId) -> usize {
        self.shelves.get(customer).map_or(0, Vec::len)
    }

    pub fn active_orders(&self) -> usize {
        self.active.len()
    }

    fn open(&mut self, customer: CustomerId, quantity: u32) -> Result<(), StoreError> {
        if self.active.contains_key(&customer) {
            return Err(StoreError::DuplicateOrder(customer));
        }
        debug!(%customer, quantity, "Order opened");
        self.shelves.insert(customer.clone(), Vec::new());
        self.active.insert(customer, quantity);
        Ok(())
    }

    fn cancel(&mut self, customer: &CustomerId) -> bool {
        self.shelves.remove(customer);
        self.waiting.remove(customer);
        self.active.remove(customer).is_some()
    }

    fn deposit(&mut self, customer: CustomerId, breads: Vec<Bread>) -> Result<usize, StoreError> {
        let Some(shelf) = self.shelves.get_mut(&customer) else {
            return Err(StoreError::UnknownCustomer(customer));
        };
        shelf.extend(breads);
        let delivered = shelf.len();
        debug!(%customer, delivered, "Breads deposited");
        self.wake_ready();
        Ok(delivered)
    }

    /// Empties the shelf and closes the order, returning what was on it.
    fn take_shelf(&mut self, customer: &CustomerId) -> Vec<Bread> {
        self.active.remove(customer);
        let breads = self.shelves.remove(customer).unwrap_or_default();
        info!(%customer, breads = breads.len(), "Order picked up");
        breads
    }

    /// Re-checks every parked customer and hands over completed orders.
    fn wake_ready(&mut self) {
        let ready: Vec<CustomerId> = self
            .waiting
            .iter()
            .filter(|(customer, waiter)| self.delivered(customer) >= waiter.quantity as usize)
            .map(|(customer, _)| customer.clone())
            .collect();
        for customer in ready {
            if let Some(waiter) = self.waiting.remove(&customer) {
                if waiter.respond_to.is_closed() {
                    warn!(%customer, "Customer left before pickup");
                    continue;
                }
                let breads = self.take_shelf(&customer);
                reply(waiter.respond_to, Ok(breads));
            }
        }
    }

    fn collect(&mut self, customer: CustomerId, quantity: u32, respond_to: Pickup) {
        let Some(&ordered) = self.active.get(&customer) else {
            warn!(%customer, "Pickup before submission");
            return reply(respond_to, Err(StoreError::PickupBeforeSubmission(customer)));
        };
        if quantity != ordered {
            warn!(%customer, requested = quantity, ordered, "Pickup quantity differs from order");
            return reply(
                respond_to,
                Err(StoreError::QuantityMismatch {
                    customer,
                    requested: quantity,
                    ordered,
                }),
            );
        }
        match self.waiting.get(&customer) {
            Some(waiter) if waiter.respond_to.is_closed() => {
                debug!(%customer, "Replacing abandoned pickup");
                self.waiting.remove(&customer);
            }
            Some(_) => return reply(respond_to, Err(StoreError::PickupPending(customer))),
            None => {}
        }
        if self.delivered(&customer) >= ordered as usize {
            let breads = self.take_shelf(&customer);
            return reply(respond_to, Ok(breads));
        }
        debug!(%customer, quantity, delivered = self.delivered(&customer), "Customer waiting");
        self.waiting.insert(customer, WaitingCustomer { quantity, respond_to });
    }
}

impl SharedResource for FulfillmentStore {
    type Request = StoreRequest;
    const NAME: &'static str = "FulfillmentStore";

    fn handle(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::Open {
                customer,
                quantity,
                respond_to,
            } => {
                let result = self.open(customer, quantity);
                reply(respond_to, result);
            }
            StoreRequest::Cancel {
                customer,
                respond_to,
            } => {
                let cancelled = self.cancel(&customer);
                reply(respond_to, cancelled);
            }
            StoreRequest::Deposit {
                customer,
                breads,
                respond_to,
            } => {
                let result = self.deposit(customer, breads);
                reply(respond_to, result);
            }
            StoreRequest::Collect {
                customer,
                quantity,
                respond_to,
            } => self.collect(customer, quantity, respond_to),
            StoreRequest::Delivered {
                customer,
                respond_to,
            } => {
                let delivered = self.delivered(&customer);
                reply(respond_to, delivered);
            }
        }
    }

    fn parked(&self) -> usize {
        self.waiting.len()
    }
}
