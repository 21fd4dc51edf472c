// ABOUTME: Row layout engine for the panel grid.
// ABOUTME: Balances auto-resizing panels within a row and splits overflowing rows.

use std::collections::BTreeMap;

use grid_core::{LayoutSettings, PanelWidth};

/// Outcome of balancing a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    /// The row's panels with their new widths, in input order
    pub panels: Vec<PanelWidth>,
    /// Columns left over after balancing; negative means the row overflows
    pub remaining: i64,
}

impl Balance {
    pub fn fits(&self) -> bool {
        self.remaining >= 0
    }
}

/// Lays out panels on a grid described by [`LayoutSettings`].
///
/// The engine holds no per-row state. Every call takes the panels by reference
/// and hands back new width records, leaving it to the caller to apply them.
#[derive(Debug, Clone, Default)]
pub struct RowEngine {
    settings: LayoutSettings,
}

impl RowEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Redistribute width among the auto-resizing panels of one row so the row
    /// fills the grid, honoring each panel's minimum width.
    pub fn balance(&self, panels: &[PanelWidth]) -> Balance {
        let mut panels = panels.to_vec();
        let remaining = self.balance_in_place(&mut panels);
        Balance { panels, remaining }
    }

    /// Partition a row into sub-rows that each fit the grid.
    ///
    /// Overflow is resolved by moving the last panel of the first overflowing
    /// sub-row to the front of the next one, so reading the sub-rows in order
    /// always yields the input order. A sub-row holding a single panel that is
    /// wider than the grid on its own is left as is.
    pub fn layout(&self, panels: &[PanelWidth]) -> Vec<Vec<PanelWidth>> {
        let mut rows = vec![panels.to_vec()];

        for _ in 0..self.settings.max_split_iterations {
            let Some(index) = self.first_overflowing(&mut rows) else {
                return rows;
            };
            let Some(moved) = rows[index].pop() else {
                return rows;
            };
            if index + 1 == rows.len() {
                rows.push(Vec::new());
            }
            rows[index + 1].insert(0, moved);
            tracing::trace!("Row {} overflowed, moved its last panel down", index);
        }

        tracing::debug!(
            "Split limit ({}) reached with {} sub-rows, keeping partial layout",
            self.settings.max_split_iterations,
            rows.len()
        );
        rows
    }

    /// Balance every row in order and return the first one that still
    /// overflows and can give up a panel.
    fn first_overflowing(&self, rows: &mut [Vec<PanelWidth>]) -> Option<usize> {
        for (index, row) in rows.iter_mut().enumerate() {
            let remaining = self.balance_in_place(row);
            if remaining < 0 && row.len() > 1 {
                return Some(index);
            }
        }
        None
    }

    fn balance_in_place(&self, panels: &mut [PanelWidth]) -> i64 {
        // Accounting in i64 so sums of u32 widths never wrap
        let mut available = i64::from(self.settings.grid_columns);
        for panel in panels.iter().filter(|p| !p.auto_resize) {
            available -= i64::from(panel.width);
        }

        let resizable: Vec<usize> = panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.auto_resize)
            .map(|(i, _)| i)
            .collect();
        if resizable.is_empty() {
            return available;
        }

        for &i in &resizable {
            let panel = &mut panels[i];
            panel.width = panel.effective_min_width();
            available -= i64::from(panel.width);
        }

        for _ in 0..self.settings.max_balance_iterations {
            let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
            for &i in &resizable {
                groups.entry(panels[i].width).or_default().push(i);
            }

            let mut levels = groups.into_iter();
            let Some((_, smallest)) = levels.next() else {
                break;
            };
            // The smallest group grows at most up to the next width level
            let ceiling = levels.next().map(|(width, _)| i64::from(width));

            let count = smallest.len();
            for (pos, &i) in smallest.iter().enumerate() {
                let panel = &mut panels[i];
                let current = i64::from(panel.width);
                let share = available.div_euclid((count - pos) as i64);

                let mut target = current + share;
                if let Some(ceiling) = ceiling {
                    target = target.min(ceiling);
                }
                if target <= 0 {
                    target = 1;
                }
                target = target
                    .max(i64::from(panel.effective_min_width()))
                    .min(i64::from(u32::MAX));

                available += current - target;
                panel.width = target as u32;
            }

            if available <= 0 {
                break;
            }
        }

        available
    }
}

/// Balance one row on the default 12-column grid
pub fn balance_row(panels: &[PanelWidth]) -> Balance {
    RowEngine::default().balance(panels)
}

/// Lay out one row on the default 12-column grid
pub fn layout_row(panels: &[PanelWidth]) -> Vec<Vec<PanelWidth>> {
    RowEngine::default().layout(panels)
}
