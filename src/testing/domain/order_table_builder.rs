use crate::domain::{OrderDatabase, OrderRecord};

/// Builder for in-memory order tables used in domain and app unit tests.
#[derive(Debug, Clone, Default)]
pub struct OrderTableBuilder {
    orders: Vec<(String, OrderRecord)>,
}

impl OrderTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(
        mut self,
        id: impl Into<String>,
        status: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        self.orders.push((id.into(), OrderRecord::new(status, details)));
        self
    }

    pub fn build(self) -> OrderDatabase {
        self.orders.into_iter().collect()
    }
}

/// The four mock orders, one per progress step.
pub fn sample_orders() -> OrderDatabase {
    OrderTableBuilder::new()
        .order(
            "IK12345",
            "Shipped",
            "Your hand-painted vase left our warehouse. Estimated delivery: Nov 10.",
        )
        .order("IK67890", "Processing", "Your custom block-print saree is being prepared by our artisan.")
        .order("IK55500", "Delivered", "Your order was delivered on Nov 7.")
        .order("IK99999", "Order Placed", "We've received your order for the 'Jaipur Blue' pottery set.")
        .build()
}
