use crate::dispatch::DispatchError;
use crate::framework::Response;
use crate::model::{BakerId, Order};

/// Messages accepted by the dispatch actor.
#[derive(Debug)]
pub enum DispatchRequest {
    /// Enqueue an order. Answers with the baker whose queue received it, or
    /// `None` under the shared policy.
    Submit {
        order: Order,
        baker: Option<BakerId>,
        respond_to: Response<Result<Option<BakerId>, DispatchError>>,
    },
    /// Take the next order for `baker`, parking while its queue is empty.
    /// `Ok(None)` means the dispatch is closed and drained.
    Take {
        baker: BakerId,
        respond_to: Response<Result<Option<Order>, DispatchError>>,
    },
    /// Stop accepting orders and release every idle baker.
    Close { respond_to: Response<()> },
    /// Number of queued orders not yet taken.
    Pending { respond_to: Response<usize> },
}
