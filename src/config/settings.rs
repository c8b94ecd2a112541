//! Configuration settings for Botdeck.

use crate::catalog::Tool;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tool catalog entries. Empty means "use the built-in catalog".
    pub tools: Vec<Tool>,
    /// UI configuration.
    pub ui: UiConfig,
    /// Notification banner configuration.
    pub banner: BannerConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates (drives the marquee).
    pub tick_rate_ms: u64,
    /// Terminal width (columns) below which the tool selector collapses to a
    /// single compact control.
    pub compact_width: u16,
    /// Floor for the embed pane height (rows). The pane never collapses
    /// below this, whatever the terminal geometry says.
    pub min_embed_height: u16,
    /// Rows left free below the embed pane.
    pub bottom_margin: u16,
    /// Delay in milliseconds before the one-shot post-mount geometry
    /// recompute. Some terminals report a stale size right after the
    /// alternate screen flips.
    pub settle_delay_ms: u64,
    /// HTTP timeout for embed fetches, in seconds.
    pub embed_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            compact_width: 90,
            min_embed_height: 8,
            bottom_margin: 1,
            settle_delay_ms: 200,
            embed_timeout_secs: 15,
        }
    }
}

/// Notification banner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Marquee message.
    pub message: String,
    /// Community link opened from the banner.
    pub link_url: String,
    /// Whether the banner can be dismissed.
    pub can_close: bool,
    /// Auto-hide after this many seconds (0 to disable).
    pub auto_hide_secs: u64,
    /// Persist dismissal across sessions. When false the dismissal lives in
    /// memory and the banner comes back on the next launch.
    pub durable_dismissal: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            message: "Welcome to Botdeck! Join our Telegram community for classes, \
                      strategies and signals."
                .to_string(),
            link_url: "https://t.me/botdeck".to_string(),
            can_close: true,
            auto_hide_secs: 120,
            durable_dismissal: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Switch to the dashboard view.
    pub dashboard: String,
    /// Switch to the signals view.
    pub signals: String,
    /// Switch to the auto-trading view.
    pub trading: String,
    /// Start or stop the trading loop.
    pub toggle_trading: String,
    /// Next tool in the catalog.
    pub next_tool: String,
    /// Previous tool in the catalog.
    pub prev_tool: String,
    /// Retry a failed embed.
    pub retry: String,
    /// Open the current tool in the system browser.
    pub open_external: String,
    /// Dismiss the notification banner.
    pub dismiss_banner: String,
    /// Open the banner's community link.
    pub banner_link: String,
    /// Activate the selected dashboard card.
    pub select: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            dashboard: "1".to_string(),
            signals: "2".to_string(),
            trading: "3".to_string(),
            toggle_trading: "s".to_string(),
            next_tool: "Tab".to_string(),
            prev_tool: "BackTab".to_string(),
            retry: "r".to_string(),
            open_external: "o".to_string(),
            dismiss_banner: "d".to_string(),
            banner_link: "t".to_string(),
            select: "Enter".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.min_embed_height, config.ui.min_embed_height);
        assert_eq!(parsed.banner.link_url, config.banner.link_url);
        assert_eq!(parsed.keybindings.quit, config.keybindings.quit);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[ui]\ncompact_width = 72\n").unwrap();
        assert_eq!(parsed.ui.compact_width, 72);
        assert_eq!(parsed.ui.settle_delay_ms, UiConfig::default().settle_delay_ms);
        assert!(parsed.tools.is_empty());
    }
}
