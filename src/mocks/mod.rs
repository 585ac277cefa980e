//! In-memory stand-in for the external backend, for development and tests

pub mod mock_backend;

pub use mock_backend::{configure_mock_backend, MockBackend};
