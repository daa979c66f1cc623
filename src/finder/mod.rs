//! Directional element lookup
//!
//! This module finds elements by their position relative to another element:
//! "the input right of this label", "the button below that heading". It includes:
//! - ScanProgram: the outward sweep evaluated on the page
//! - Finder: resolves the reference box, runs the scan, retries once
//! - ElementHandle: the located element, acting through the channel

pub mod geometry;
pub mod handle;
pub mod options;
pub mod program;
pub mod search;

pub use geometry::{BoundingBox, Point};
pub use handle::ElementHandle;
pub use options::{DEFAULT_RETRY_DELAY, DEFAULT_TAG, FinderOptions};
pub use program::{Direction, GOLDEN_STEP, Offset, SCAN_STEPS, STEP_PX, ScanProgram, center_of};
pub use search::Finder;

use crate::channel::RemoteChannel;
use std::fmt;

/// What a failed search was looking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDiagnostics {
    pub locator: String,
    pub direction: Direction,
    pub tag: String,
}

impl SearchDiagnostics {
    pub fn new(locator: impl Into<String>, direction: Direction, tag: impl Into<String>) -> Self {
        Self { locator: locator.into(), direction, tag: tag.into() }
    }
}

impl fmt::Display for SearchDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.locator, self.direction, self.tag)
    }
}

/// Finder for elements to the right of `locator`
pub fn right_of<'c>(channel: &'c dyn RemoteChannel, locator: impl Into<String>) -> Finder<'c> {
    Finder::new(channel, locator, Direction::Right)
}

/// Finder for elements to the left of `locator`
pub fn left_of<'c>(channel: &'c dyn RemoteChannel, locator: impl Into<String>) -> Finder<'c> {
    Finder::new(channel, locator, Direction::Left)
}

/// Finder for elements above `locator`
pub fn above<'c>(channel: &'c dyn RemoteChannel, locator: impl Into<String>) -> Finder<'c> {
    Finder::new(channel, locator, Direction::Above)
}

/// Finder for elements below `locator`
pub fn below<'c>(channel: &'c dyn RemoteChannel, locator: impl Into<String>) -> Finder<'c> {
    Finder::new(channel, locator, Direction::Below)
}

/// Finder for the element nearest to `locator`, in any direction
pub fn near<'c>(channel: &'c dyn RemoteChannel, locator: impl Into<String>) -> Finder<'c> {
    Finder::new(channel, locator, Direction::Near)
}
