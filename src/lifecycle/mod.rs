//! # Bakery Lifecycle & Orchestration
//!
//! This module starts, wires and stops every task of a bakery run.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`BakeryConfig`] and [`Scenario`], validated before anything starts
//! 2. **Actor Creation** - one actor per shared resource, one task per baker
//! 3. **Customer Access** - [`Counter`] for placing and collecting orders
//! 4. **Shutdown** - close the dispatch only once no order is in flight, then
//!    join bakers and resource actors
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Shutdown Ordering
//!
//! Bakers hold clients to every resource, so the resource channels cannot
//! close while bakers run. [`Bakery::close`] therefore closes the dispatch
//! explicitly first; each idle baker is answered with "no more work" and
//! exits, dropping its clients. Dropping the bakery's own clients then lets
//! each resource actor leave its loop.
//!
//! Closing while an order is still queued or baking is a caller error: the
//! bakers still drain their queues, but a customer that has not collected is
//! left waiting on a store that is about to disappear.

pub mod bakery;
pub mod config;
pub mod counter;
pub mod tracing;

pub use bakery::*;
pub use config::*;
pub use counter::*;
pub use self::tracing::*;
