//! Seam between the finder and whatever drives the page

use crate::error::Result;
use crate::finder::{BoundingBox, ScanProgram};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Opaque reference to an element, issued by the remote side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefToken(String);

impl RefToken {
    /// Attribute the Chrome channel stamps on located elements
    pub const ATTRIBUTE: &'static str = "data-spatial-ref";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable CSS locator for the referenced element
    pub fn selector(&self) -> String {
        let escaped = self.0.replace('\\', "\\\\").replace('\'', "\\'");
        format!("[{}='{}']", Self::ATTRIBUTE, escaped)
    }
}

impl fmt::Display for RefToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote browser control channel.
///
/// Implementations must resolve locators, run a [`ScanProgram`] where the DOM
/// lives and act on the tokens they hand out. A `None` from
/// [`evaluate`](RemoteChannel::evaluate) is the explicit "not found" signal;
/// any `Err` is a channel failure and is never retried by the finder.
#[async_trait]
pub trait RemoteChannel: Send + Sync {
    /// Bounding box of the element `locator` points at.
    ///
    /// Fails with [`BrowserError::ReferenceNotFound`](crate::BrowserError::ReferenceNotFound)
    /// when the locator does not resolve.
    async fn bounding_box(&self, locator: &str) -> Result<BoundingBox>;

    /// Run the scan remotely and return the first matching element
    async fn evaluate(&self, program: &ScanProgram) -> Result<Option<RefToken>>;

    /// Cooperative delay between scan attempts
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn click(&self, token: &RefToken) -> Result<()>;

    async fn input(&self, token: &RefToken, value: &str) -> Result<()>;

    async fn clear(&self, token: &RefToken) -> Result<()>;
}
