//! Browser session management and the Chrome-backed remote channel

pub mod chrome;
pub mod config;
pub mod session;
pub mod url;

pub use chrome::ChromeChannel;
pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
pub use url::normalize_url;
