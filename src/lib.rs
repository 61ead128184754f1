//! ordtrack: Track orders through the Order Placed, Processing, Shipped, and Delivered stages.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{OrderSummary, Tone, TrackOutcome, TrackingView, list, load_orders, track};
pub use domain::{
    AppError, Mark, OrderDatabase, OrderId, OrderRecord, ProgressMarks, ProgressStep,
    ResolutionResult, resolve,
};
pub use ports::OrderSource;
