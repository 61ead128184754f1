use crate::ports::OrderSource;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: OrderSource> {
    orders: S,
}

impl<S: OrderSource> AppContext<S> {
    /// Create a new application context.
    pub fn new(orders: S) -> Self {
        Self { orders }
    }

    /// Get a reference to the order source.
    pub fn orders(&self) -> &S {
        &self.orders
    }
}
