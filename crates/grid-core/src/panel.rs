// ABOUTME: Panel width record shared by the layout engine and its callers.
// ABOUTME: Widths are measured in columns of a 12-column grid.

use serde::{Deserialize, Serialize};

/// Number of columns in one dashboard row
pub const GRID_COLUMNS: u32 = 12;

/// Width allocation for one panel in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelWidth {
    /// Current width in grid columns
    #[serde(default = "default_width")]
    pub width: u32,

    /// Whether the layout engine may change `width`
    #[serde(default)]
    pub auto_resize: bool,

    /// Floor for `width` when `auto_resize` is set
    #[serde(default = "default_min_width")]
    pub min_width: u32,
}

fn default_width() -> u32 {
    1
}

fn default_min_width() -> u32 {
    1
}

impl PanelWidth {
    /// A panel whose width is left alone by the engine
    pub const fn fixed(width: u32) -> Self {
        Self {
            width,
            auto_resize: false,
            min_width: 1,
        }
    }

    /// A panel that grows to fill the row, starting from one column
    pub const fn auto() -> Self {
        Self {
            width: 1,
            auto_resize: true,
            min_width: 1,
        }
    }

    /// An auto-resizing panel that never shrinks below `min_width`
    pub const fn auto_with_min(min_width: u32) -> Self {
        Self {
            width: 1,
            auto_resize: true,
            min_width,
        }
    }

    /// Minimum width with the implicit floor of one column applied
    pub fn effective_min_width(&self) -> u32 {
        self.min_width.max(1)
    }
}

impl Default for PanelWidth {
    fn default() -> Self {
        Self::fixed(1)
    }
}
