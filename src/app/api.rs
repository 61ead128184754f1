//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::builtin_orders::builtin_orders;
use crate::adapters::order_file::load_order_file;
use crate::app::{
    AppContext,
    commands::{list, track},
};
use crate::domain::OrderDatabase;

pub use crate::app::commands::list::OrderSummary;
pub use crate::app::commands::track::TrackOutcome;
pub use crate::app::view::{Tone, TrackingView};
pub use crate::domain::AppError;

/// Load the order table from `path`, or the built-in table when `None`.
pub fn load_orders(path: Option<&Path>) -> Result<OrderDatabase, AppError> {
    match path {
        Some(path) => load_order_file(path),
        None => builtin_orders(),
    }
}

/// Create an `AppContext` over the selected order table.
pub(crate) fn create_context(path: Option<&Path>) -> Result<AppContext<OrderDatabase>, AppError> {
    Ok(AppContext::new(load_orders(path)?))
}

/// Track one order by identifier.
///
/// Unknown identifiers and unrecognized statuses are reported in the outcome,
/// not as errors; errors only come from loading the order table.
pub fn track(identifier: &str, orders: Option<&Path>) -> Result<TrackOutcome, AppError> {
    let ctx = create_context(orders)?;
    Ok(track::execute(&ctx, identifier))
}

/// List every order in the table.
pub fn list(orders: Option<&Path>) -> Result<Vec<OrderSummary>, AppError> {
    let ctx = create_context(orders)?;
    Ok(list::execute(&ctx))
}
