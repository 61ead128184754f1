use serde::Serialize;

use crate::app::AppContext;
use crate::domain::ProgressStep;
use crate::ports::OrderSource;

/// One stored order as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: String,
    pub status: String,
    /// `None` when the stored status is not a progress step.
    pub step: Option<ProgressStep>,
}

/// Summarize every stored order in identifier order.
pub fn execute<S: OrderSource>(ctx: &AppContext<S>) -> Vec<OrderSummary> {
    ctx.orders()
        .entries()
        .into_iter()
        .map(|(id, record)| OrderSummary {
            id: id.to_string(),
            status: record.status.clone(),
            step: ProgressStep::from_label(&record.status),
        })
        .collect()
}
