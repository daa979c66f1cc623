use crate::finder::SearchDiagnostics;
use thiserror::Error;

/// Errors produced by the browser session, the remote channel and the finder
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// The reference locator did not resolve to a live element
    #[error("Reference element '{locator}' not found: {reason}")]
    ReferenceNotFound { locator: String, reason: String },

    /// Both scan attempts finished without a match
    #[error("unable to find: {0}")]
    NotFound(SearchDiagnostics),

    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Element {action} failed: {reason}")]
    ActionFailed { action: String, reason: String },

    #[error("Invalid target tag: {0:?}")]
    InvalidTag(String),

    #[error("Search cancelled")]
    Cancelled,
}

impl BrowserError {
    /// Shorthand for element operation failures
    pub(crate) fn action(action: &str, reason: impl ToString) -> Self {
        Self::ActionFailed { action: action.to_string(), reason: reason.to_string() }
    }

    /// Diagnostics of a failed search, if this is one
    pub fn diagnostics(&self) -> Option<&SearchDiagnostics> {
        match self {
            Self::NotFound(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BrowserError>;
