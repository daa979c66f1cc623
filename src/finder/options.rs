use std::time::Duration;

/// Tag searched for when a call does not name one
pub const DEFAULT_TAG: &str = "INPUT";

/// Delay before the single retry of a scan
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Options controlling a finder
#[derive(Debug, Clone, PartialEq)]
pub struct FinderOptions {
    /// Pause between the first and the second scan attempt
    pub retry_delay: Duration,

    /// Tag used by `click`, `input`, `clear` and `find(None)`
    pub default_tag: String,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self { retry_delay: DEFAULT_RETRY_DELAY, default_tag: DEFAULT_TAG.to_string() }
    }
}

impl FinderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set retry delay
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Builder method: set default tag
    pub fn default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }
}
