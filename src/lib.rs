//! # Botdeck - Trading Bot Dashboard TUI
//!
//! A terminal dashboard for a trading bot: launch cards, a notification
//! marquee, and an embedded viewer for third-party signal tools. Built with
//! ratatui.
//!
//! ## Architecture
//!
//! The application follows a clean architecture pattern:
//!
//! - **App**: Core application state and lifecycle management
//! - **Catalog**: The fixed list of embeddable signal tools
//! - **Embed**: The boundary to externally hosted tool content
//! - **UI**: Layout and rendering logic
//! - **State**: Centralized state management
//! - **Events**: Input handling and event processing
//! - **Storage**: Injected key-value persistence (banner dismissal)
//! - **Config**: Configuration management

pub mod app;
pub mod catalog;
pub mod config;
pub mod embed;
pub mod error;
pub mod events;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::App;
pub use catalog::{Tool, ToolCatalog};
pub use config::Config;
pub use error::{Error, Result};
