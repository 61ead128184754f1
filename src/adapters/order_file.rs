use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, OrderDatabase, parse_order_table};

/// Load an order table from a TOML file.
pub fn load_order_file(path: &Path) -> Result<OrderDatabase, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::OrderFileMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;

    let orders = parse_order_table(&content)?;
    tracing::debug!(path = %path.display(), count = orders.len(), "loaded order file");
    Ok(orders)
}
