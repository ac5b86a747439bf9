//! Error types for E2E testing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Playwright not found. Install with: npx playwright install")]
    PlaywrightNotFound,

    #[error("Browser launch failed: {0}")]
    Launch(String),

    #[error("Driver command failed: {command} - {reason}")]
    Driver { command: String, reason: String },

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Bridge protocol error: {0}")]
    Protocol(String),

    #[error("Unknown browser '{0}' (expected chromium, firefox or webkit)")]
    UnknownBrowser(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Config(#[from] shopwright_common::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl E2eError {
    pub fn assertion(message: impl Into<String>) -> Self {
        E2eError::AssertionFailed(message.into())
    }
}

pub type E2eResult<T> = Result<T, E2eError>;
