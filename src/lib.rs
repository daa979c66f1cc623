//! # spatial-locator
//!
//! Find elements by where they sit on the page rather than by what they are called:
//! "the input to the right of the *Email* label", "the button below the table".
//!
//! ## How it works
//!
//! A [`Finder`] reads the bounding box of a reference element, takes its center and sweeps
//! outward, asking the page which element occupies each sampled point, until it hits an
//! element with the wanted tag:
//!
//! - `RIGHT`, `LEFT`, `ABOVE`, `BELOW`: 300 points, 10px apart, along one axis
//! - `NEAR`: 300 points on a golden-angle spiral, so no axis is favoured
//!
//! When a sweep comes back empty the finder waits once (500ms by default) and sweeps again;
//! a second miss is reported as [`BrowserError::NotFound`] naming the locator, direction and tag.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spatial_locator::{BrowserSession, LaunchOptions, finder};
//!
//! # async fn run() -> spatial_locator::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.navigate("https://example.com/signup")?;
//! session.wait_for_navigation()?;
//!
//! let channel = session.channel()?;
//!
//! // Type into the input right of the label
//! finder::right_of(&channel, "#email-label").input("me@example.com").await?;
//!
//! // Click the nearest button
//! let submit = finder::near(&channel, "#terms").find(Some("button")).await?;
//! submit.click().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`finder`]: scan programs, the finder and element handles
//! - [`channel`]: the [`RemoteChannel`] trait a page driver implements
//! - [`browser`]: Chrome session management and [`ChromeChannel`]
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod channel;
pub mod error;
pub mod finder;

pub use browser::{BrowserSession, ChromeChannel, ConnectionOptions, LaunchOptions};
pub use channel::{RefToken, RemoteChannel};
pub use error::{BrowserError, Result};
pub use finder::{BoundingBox, Direction, ElementHandle, Finder, FinderOptions, ScanProgram, SearchDiagnostics};
