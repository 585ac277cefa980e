//! HTTP handlers

pub mod api;
pub mod auth;
pub mod health;
pub mod pages;
pub mod signup;

use crate::pages::Toast;
use serde::Deserialize;

/// Query string accepted by the rendered pages
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub toast: Option<String>,
    pub signup: Option<String>,
}

impl PageQuery {
    pub fn toast(&self) -> Option<Toast> {
        self.toast.as_deref().and_then(Toast::from_query_value)
    }

    pub fn signup_open(&self) -> bool {
        self.signup.as_deref() == Some("open")
    }
}

/// `path?toast=...` for the post/redirect/get flow
pub fn with_toast(path: &str, toast: Toast) -> String {
    format!("{}?toast={}", path, toast.query_value())
}
