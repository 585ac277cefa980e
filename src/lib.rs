//! Portal authentication front end
//!
//! Sign-in, sign-up and session-gated navigation to the chat service, built
//! with Actix-web. Credentials are checked by an external backend; this
//! service only relays them and keeps the result in a signed, cross-subdomain
//! session cookie.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod mocks;
pub mod pages;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "portal-auth";
