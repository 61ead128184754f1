//! Order table file format.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{AppError, OrderDatabase, OrderId, OrderRecord};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrderTableFile {
    #[serde(default)]
    orders: BTreeMap<String, OrderRecord>,
}

/// Parse an order table from TOML content.
///
/// Keys are kept verbatim. Keys that a normalized lookup can never reach are
/// kept as well, but reported.
pub fn parse_order_table(content: &str) -> Result<OrderDatabase, AppError> {
    let file: OrderTableFile = toml::from_str(content)?;

    if file.orders.is_empty() {
        return Err(AppError::InvalidOrderFile("no orders defined under [orders]".to_string()));
    }

    for id in file.orders.keys().filter(|id| !OrderId::is_normalized(id)) {
        tracing::warn!(order_id = %id, "order key is not uppercase and trimmed; lookups will never match it");
    }

    Ok(file.orders.into_iter().collect())
}
