//! spatial-locator CLI
//!
//! Opens a page, finds an element relative to a reference element and optionally acts on it.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use spatial_locator::browser::normalize_url;
use spatial_locator::{BrowserSession, ConnectionOptions, Direction, Finder, FinderOptions, LaunchOptions};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Action {
    /// Only report the located element
    Find,
    Click,
    Input,
    Clear,
}

#[derive(Parser)]
#[command(name = "spatial-locator")]
#[command(version)]
#[command(about = "Find page elements relative to another element", long_about = None)]
struct Cli {
    /// Page to open before searching
    #[arg(long)]
    url: String,

    /// Locator (CSS or XPath) of the reference element
    #[arg(long)]
    from: String,

    /// right, left, above, below or near
    #[arg(long, short = 'd', default_value = "right")]
    direction: Direction,

    /// Tag to search for (default: INPUT)
    #[arg(long)]
    tag: Option<String>,

    /// What to do with the located element
    #[arg(long, short = 'a', value_enum, default_value = "find")]
    action: Action,

    /// Text for the input action
    #[arg(long, required_if_eq("action", "input"))]
    value: Option<String>,

    /// Delay before the single retry, in milliseconds
    #[arg(long, default_value = "500")]
    retry_delay_ms: u64,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<String>,

    /// WebSocket endpoint URL for remote browser connection
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let session = match &cli.ws_endpoint {
        Some(endpoint) => {
            eprintln!("Connecting to {}", endpoint);
            BrowserSession::connect(ConnectionOptions::new(endpoint.clone()))?
        }
        None => {
            let mut options = LaunchOptions::new().headless(!cli.headed);
            if let Some(path) = &cli.executable_path {
                options = options.chrome_path(path);
            }
            BrowserSession::launch(options)?
        }
    };

    let url = normalize_url(&cli.url);
    session.navigate(&url)?;
    session.wait_for_navigation()?;

    let channel = session.channel()?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut options = FinderOptions::new().retry_delay(Duration::from_millis(cli.retry_delay_ms));
    if let Some(tag) = &cli.tag {
        options = options.default_tag(tag.clone());
    }

    let finder = Finder::new(&channel, cli.from.clone(), cli.direction).with_options(options).with_cancellation(cancel);

    let handle = match cli.action {
        Action::Find => finder.find(None).await,
        Action::Click => finder.click().await,
        Action::Input => finder.input(cli.value.as_deref().unwrap_or_default()).await,
        Action::Clear => finder.clear().await,
    }
    .with_context(|| format!("{:?} {} of {} failed", cli.action, finder.direction(), finder.from_locator()))?;

    println!("{}", handle.locator());

    session.close()?;
    Ok(())
}
