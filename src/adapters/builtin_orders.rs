//! Built-in order table embedded in the binary.

use crate::domain::{AppError, OrderDatabase, parse_order_table};

static BUILTIN_ORDERS: &str = include_str!("../assets/orders.toml");

/// Load the built-in order table.
pub fn builtin_orders() -> Result<OrderDatabase, AppError> {
    parse_order_table(BUILTIN_ORDERS)
}
