pub mod builtin_orders;
pub mod order_file;
