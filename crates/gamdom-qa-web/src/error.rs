//! Error types for browser automation

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Timeout after {}ms waiting for: {what}", timeout.as_millis())]
    Timeout { what: String, timeout: Duration },

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Script result error: {0}")]
    Script(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
