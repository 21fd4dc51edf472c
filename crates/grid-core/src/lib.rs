// ABOUTME: Shared types and settings for panel-grid.
// ABOUTME: Defines panel width records and layout settings file handling.

pub mod panel;
pub mod settings;

pub use panel::{PanelWidth, GRID_COLUMNS};
pub use settings::{LayoutSettings, SettingsError};
