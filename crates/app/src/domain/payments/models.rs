//! Payment models.

use serde::{Deserialize, Serialize};

/// Status reported by the processor for a fully paid intent.
pub const SUCCEEDED: &str = "succeeded";

/// Result of a payment confirmation that did not error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Payment intent id
    pub id: String,

    /// Processor status, e.g. `succeeded` or `requires_action`
    pub status: String,
}

impl PaymentOutcome {
    pub fn is_succeeded(&self) -> bool {
        self.status == SUCCEEDED
    }
}
