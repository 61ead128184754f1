pub mod domain;

pub use domain::{OrderTableBuilder, sample_orders};
