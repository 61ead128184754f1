mod order_source;

pub use order_source::OrderSource;
