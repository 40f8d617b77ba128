use crate::framework::Response;
use crate::fulfillment::StoreError;
use crate::model::{Bread, CustomerId};

/// Messages accepted by the fulfillment store.
#[derive(Debug)]
pub enum StoreRequest {
    /// Register an order so its breads can be deposited and collected.
    Open {
        customer: CustomerId,
        quantity: u32,
        respond_to: Response<Result<(), StoreError>>,
    },
    /// Forget an order that never reached a baker.
    Cancel {
        customer: CustomerId,
        respond_to: Response<bool>,
    },
    /// Add freshly baked breads to a customer's shelf.
    Deposit {
        customer: CustomerId,
        breads: Vec<Bread>,
        respond_to: Response<Result<usize, StoreError>>,
    },
    /// Wait until at least `quantity` breads are on the shelf, then take them all.
    Collect {
        customer: CustomerId,
        quantity: u32,
        respond_to: Response<Result<Vec<Bread>, StoreError>>,
    },
    /// Breads currently on a customer's shelf.
    Delivered {
        customer: CustomerId,
        respond_to: Response<usize>,
    },
}
