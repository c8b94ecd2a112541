//! TUI widgets.

mod banner;
mod cards;
mod embed_pane;
mod help;
mod status_bar;
mod tab_bar;
mod tool_bar;
mod trading;

pub use banner::Banner;
pub use cards::Cards;
pub use embed_pane::EmbedPane;
pub use help::HelpPanel;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use tool_bar::ToolBar;
pub use trading::Trading;
