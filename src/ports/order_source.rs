//! Order source port definition.

use crate::domain::OrderRecord;

/// Trait for reading a table of orders.
pub trait OrderSource {
    /// Get the record stored under exactly `id`.
    fn get(&self, id: &str) -> Option<&OrderRecord>;

    /// List all stored entries sorted by identifier.
    fn entries(&self) -> Vec<(&str, &OrderRecord)>;
}
