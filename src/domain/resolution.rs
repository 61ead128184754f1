//! Order status resolution.

use serde::Serialize;

use super::{OrderId, ProgressStep};
use crate::ports::OrderSource;

/// Outcome of resolving one order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// The order exists and its status is a recognized step.
    Found { status_index: usize, status: String, details: String },
    /// No order is stored under the normalized identifier.
    NotFound { queried_id: String },
    /// The stored status is not one of the progress steps.
    UnknownStatus { status: String },
}

impl ResolutionResult {
    /// Short machine-readable name of the outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionResult::Found { .. } => "found",
            ResolutionResult::NotFound { .. } => "not_found",
            ResolutionResult::UnknownStatus { .. } => "unknown_status",
        }
    }

    /// Current step for a `Found` result.
    pub fn step(&self) -> Option<ProgressStep> {
        match self {
            ResolutionResult::Found { status_index, .. } => {
                ProgressStep::ALL.get(*status_index).copied()
            }
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolutionResult::Found { .. })
    }
}

/// Resolve a raw identifier against an order source.
///
/// The identifier is trimmed and uppercased first; an empty identifier takes
/// the same lookup path as any other. Resolution has no side effects.
pub fn resolve<S: OrderSource + ?Sized>(identifier: &str, source: &S) -> ResolutionResult {
    let id = OrderId::normalize(identifier);

    let Some(record) = source.get(id.as_str()) else {
        return ResolutionResult::NotFound { queried_id: id.into() };
    };

    match ProgressStep::from_label(&record.status) {
        Some(step) => ResolutionResult::Found {
            status_index: step.index(),
            status: record.status.clone(),
            details: record.details.clone(),
        },
        None => ResolutionResult::UnknownStatus { status: record.status.clone() },
    }
}
