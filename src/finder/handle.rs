use crate::channel::{RefToken, RemoteChannel};
use crate::error::Result;
use std::fmt;

/// Element located by a finder.
///
/// Borrows the channel it was found through; every operation is forwarded to
/// that channel with the element's token.
pub struct ElementHandle<'c> {
    channel: &'c dyn RemoteChannel,
    token: RefToken,
}

impl<'c> ElementHandle<'c> {
    pub fn new(channel: &'c dyn RemoteChannel, token: RefToken) -> Self {
        Self { channel, token }
    }

    pub fn token(&self) -> &RefToken {
        &self.token
    }

    /// CSS locator that addresses this element for other tooling
    pub fn locator(&self) -> String {
        self.token.selector()
    }

    pub async fn click(&self) -> Result<&Self> {
        self.channel.click(&self.token).await?;
        Ok(self)
    }

    pub async fn input(&self, value: &str) -> Result<&Self> {
        self.channel.input(&self.token, value).await?;
        Ok(self)
    }

    pub async fn clear(&self) -> Result<&Self> {
        self.channel.clear(&self.token).await?;
        Ok(self)
    }
}

impl fmt::Debug for ElementHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHandle").field("token", &self.token).finish()
    }
}
