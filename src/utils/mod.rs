pub mod error_handler;
pub mod response_handler;
