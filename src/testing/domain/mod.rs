mod order_table_builder;

pub use order_table_builder::{OrderTableBuilder, sample_orders};
