use serde::Serialize;

use crate::app::AppContext;
use crate::app::view::TrackingView;
use crate::domain::{ResolutionResult, resolve};
use crate::ports::OrderSource;

/// Exit code for a found order.
pub const EXIT_FOUND: i32 = 0;
/// Exit code for an identifier absent from the table.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Exit code for a record whose status is not a progress step.
pub const EXIT_UNKNOWN_STATUS: i32 = 3;

/// Result of tracking one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackOutcome {
    pub result: ResolutionResult,
    pub view: TrackingView,
}

impl TrackOutcome {
    pub fn exit_code(&self) -> i32 {
        match self.result {
            ResolutionResult::Found { .. } => EXIT_FOUND,
            ResolutionResult::NotFound { .. } => EXIT_NOT_FOUND,
            ResolutionResult::UnknownStatus { .. } => EXIT_UNKNOWN_STATUS,
        }
    }
}

/// Resolve `identifier` and build the view for it.
pub fn execute<S: OrderSource>(ctx: &AppContext<S>, identifier: &str) -> TrackOutcome {
    let result = resolve(identifier, ctx.orders());
    match &result {
        ResolutionResult::Found { status, .. } => {
            tracing::debug!(order_id = identifier.trim(), status = %status, "order resolved");
        }
        ResolutionResult::NotFound { queried_id } => {
            tracing::debug!(order_id = %queried_id, "order not found");
        }
        ResolutionResult::UnknownStatus { status } => {
            tracing::info!(
                order_id = identifier.trim(),
                status = %status,
                "stored status is not a progress step"
            );
        }
    }
    let view = TrackingView::from_result(&result);
    TrackOutcome { result, view }
}
