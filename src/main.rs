//! Botdeck - A Terminal Dashboard for Trading-Bot Signal Tools
//!
//! Launch cards, a notification marquee, and an embedded viewer for
//! third-party signal tools, built with ratatui.

use botdeck::{App, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a file under the data dir.
    let log_dir = botdeck::config::log_dir().unwrap_or_else(|_| std::env::temp_dir());
    let appender = tracing_appender::rolling::daily(log_dir, "botdeck.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "botdeck=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
