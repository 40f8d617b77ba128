//! # Fulfillment Store
//!
//! The hand-off point between bakers and customers.
//!
//! Bakers deposit breads per customer as each batch leaves the oven. A
//! customer asks to collect its order and is parked until the delivered
//! count reaches the requested quantity. Every deposit re-checks every parked
//! customer. The threshold check and the clearing of the customer's shelf
//! happen inside one message, so a deposit can never land in a shelf that
//! is being emptied.
//!
//! The store also tracks which customers have an order in flight: a second
//! order for the same customer, or a pickup with no order, is rejected.
//!
//! ## Structure
//!
//! - [`state`] - [`FulfillmentStore`] and its [`SharedResource`](crate::framework::SharedResource) impl
//! - [`requests`] - [`StoreRequest`]
//! - [`error`] - [`StoreError`]

pub mod error;
pub mod requests;
pub mod state;

pub use error::*;
pub use requests::*;
pub use state::*;

use crate::clients::StoreClient;
use crate::framework::ResourceActor;

/// Creates the fulfillment store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FulfillmentStore>, StoreClient) {
    let (actor, inner) = ResourceActor::new(FulfillmentStore::default(), buffer_size);
    (actor, StoreClient::new(inner))
}
