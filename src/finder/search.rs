use crate::channel::{RefToken, RemoteChannel};
use crate::error::{BrowserError, Result};
use crate::finder::geometry::Point;
use crate::finder::handle::ElementHandle;
use crate::finder::options::FinderOptions;
use crate::finder::program::{Direction, ScanProgram, validate_tag};
use crate::finder::SearchDiagnostics;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Attempts made per search: the initial scan plus one retry
const MAX_ATTEMPTS: u8 = 2;

enum SearchState {
    Idle,
    BoxResolved(ScanProgram),
    Scanning { program: ScanProgram, attempt: u8 },
    Retrying(ScanProgram),
    Found(RefToken),
    Exhausted,
}

/// Locates elements relative to a reference element.
///
/// The reference locator and direction are fixed at construction; the target
/// tag is chosen per call. A finder holds no mutable state, so concurrent
/// searches through the same finder are fine as long as the channel allows it.
pub struct Finder<'c> {
    channel: &'c dyn RemoteChannel,
    from: String,
    direction: Direction,
    options: FinderOptions,
    cancel: CancellationToken,
}

impl<'c> Finder<'c> {
    pub fn new(channel: &'c dyn RemoteChannel, from: impl Into<String>, direction: Direction) -> Self {
        Self {
            channel,
            from: from.into(),
            direction,
            options: FinderOptions::default(),
            cancel: CancellationToken::new(),
        }
    }

    /// Builder method: set options
    pub fn with_options(mut self, options: FinderOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder method: abort searches when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn from_locator(&self) -> &str {
        &self.from
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Find the first element with `tag` (or the default tag) along the scan.
    ///
    /// Scans once, and if nothing matched waits `retry_delay` and scans again
    /// from the same center. Channel errors are returned as-is.
    pub async fn find(&self, tag: Option<&str>) -> Result<ElementHandle<'c>> {
        let tag = tag.unwrap_or(self.options.default_tag.as_str());
        let mut state = SearchState::Idle;

        loop {
            state = match state {
                SearchState::Idle => {
                    validate_tag(tag)?;
                    let bbox = self.guarded(self.channel.bounding_box(&self.from)).await?;
                    let program = ScanProgram::build(bbox.center(), self.direction, tag)?;
                    let Point { x, y } = program.center;
                    log::debug!("{}: scanning from ({}, {})", self.diagnostics(tag), x, y);
                    SearchState::BoxResolved(program)
                }
                SearchState::BoxResolved(program) => SearchState::Scanning { program, attempt: 1 },
                SearchState::Scanning { program, attempt } => {
                    match self.guarded(self.channel.evaluate(&program)).await? {
                        Some(token) => SearchState::Found(token),
                        None if attempt < MAX_ATTEMPTS => SearchState::Retrying(program),
                        None => SearchState::Exhausted,
                    }
                }
                SearchState::Retrying(program) => {
                    log::warn!(
                        "spatial locator failed, will try once more after {:?}: {}",
                        self.options.retry_delay,
                        self.diagnostics(tag)
                    );
                    self.guarded(async {
                        self.channel.sleep(self.options.retry_delay).await;
                        Ok(())
                    })
                    .await?;
                    SearchState::Scanning { program, attempt: MAX_ATTEMPTS }
                }
                SearchState::Found(token) => {
                    log::debug!("{}: found element {}", self.diagnostics(tag), token);
                    return Ok(ElementHandle::new(self.channel, token));
                }
                SearchState::Exhausted => return Err(BrowserError::NotFound(self.diagnostics(tag))),
            };
        }
    }

    /// Find the default tag and click it
    pub async fn click(&self) -> Result<ElementHandle<'c>> {
        let handle = self.find(None).await?;
        handle.click().await?;
        Ok(handle)
    }

    /// Find the default tag and type `value` into it
    pub async fn input(&self, value: &str) -> Result<ElementHandle<'c>> {
        let handle = self.find(None).await?;
        handle.input(value).await?;
        Ok(handle)
    }

    /// Find the default tag and clear it
    pub async fn clear(&self) -> Result<ElementHandle<'c>> {
        let handle = self.find(None).await?;
        handle.clear().await?;
        Ok(handle)
    }

    fn diagnostics(&self, tag: &str) -> SearchDiagnostics {
        SearchDiagnostics::new(self.from.clone(), self.direction, tag)
    }

    async fn guarded<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(BrowserError::Cancelled),
            result = fut => result,
        }
    }
}
