use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ports::OrderSource;

/// Last known state of one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub status: String,
    pub details: String,
}

impl OrderRecord {
    pub fn new(status: impl Into<String>, details: impl Into<String>) -> Self {
        Self { status: status.into(), details: details.into() }
    }
}

/// Read-only table of orders keyed by identifier.
///
/// Keys are stored verbatim and compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDatabase {
    orders: BTreeMap<String, OrderRecord>,
}

impl OrderDatabase {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderRecord)> {
        self.orders.iter().map(|(id, record)| (id.as_str(), record))
    }
}

impl<K: Into<String>> FromIterator<(K, OrderRecord)> for OrderDatabase {
    fn from_iter<I: IntoIterator<Item = (K, OrderRecord)>>(iter: I) -> Self {
        Self { orders: iter.into_iter().map(|(id, record)| (id.into(), record)).collect() }
    }
}

impl OrderSource for OrderDatabase {
    fn get(&self, id: &str) -> Option<&OrderRecord> {
        self.orders.get(id)
    }

    fn entries(&self) -> Vec<(&str, &OrderRecord)> {
        self.iter().collect()
    }
}
