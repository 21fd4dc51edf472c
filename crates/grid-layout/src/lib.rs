// ABOUTME: Panel layout for 12-column dashboard rows.
// ABOUTME: Fills rows with auto-resizing panels and wraps overflow onto new rows.

mod engine;
mod row;

pub use engine::{balance_row, layout_row, Balance, RowEngine};
pub use grid_core::{LayoutSettings, PanelWidth, GRID_COLUMNS};
pub use row::{PanelId, Row, RowEvent, RowPanel};
