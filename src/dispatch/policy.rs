use serde::{Deserialize, Serialize};

/// How submitted orders reach bakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPolicy {
    /// One queue served by every baker.
    #[default]
    Shared,
    /// One queue per baker, chosen at submission.
    Assigned,
}
