//! FundLab TUI — terminal dashboard over synthetic fund performance data.
//!
//! Layout:
//! - Sidebar: fund multi-select and inclusive year-range slider
//! - Main area: one of five views (Line, Bar, Box, Heatmap, Statistics)
//! - Status bar: record count and the latest status message

pub mod app;
pub mod cli;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use cli::Cli;
pub use input::handle_key;
