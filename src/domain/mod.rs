pub mod error;
pub mod order_id;
pub mod order_record;
pub mod order_table;
pub mod progress;
pub mod resolution;

pub use error::AppError;
pub use order_id::OrderId;
pub use order_record::{OrderDatabase, OrderRecord};
pub use order_table::parse_order_table;
pub use progress::{Mark, ProgressMarks, ProgressStep};
pub use resolution::{ResolutionResult, resolve};
