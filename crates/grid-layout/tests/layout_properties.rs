//! Property tests for row balancing and overflow splitting.

use grid_layout::{balance_row, layout_row, PanelWidth, GRID_COLUMNS};
use proptest::prelude::*;

fn panel_strategy() -> impl Strategy<Value = PanelWidth> {
    prop_oneof![
        (1u32..=12).prop_map(PanelWidth::fixed),
        (1u32..=12, 1u32..=12).prop_map(|(width, min_width)| PanelWidth {
            width,
            auto_resize: true,
            min_width,
        }),
    ]
}

fn row_strategy() -> impl Strategy<Value = Vec<PanelWidth>> {
    prop::collection::vec(panel_strategy(), 0..8)
}

/// Rows whose minimum footprint fits the grid, with at least one auto panel
fn fitting_row_strategy() -> impl Strategy<Value = Vec<PanelWidth>> {
    (
        prop::collection::vec((any::<bool>(), 1u32..=3), 0..4),
        1u32..=3,
        0usize..4,
    )
        .prop_map(|(others, min_width, at)| {
            let mut panels: Vec<PanelWidth> = others
                .into_iter()
                .map(|(auto, width)| {
                    if auto {
                        PanelWidth::auto_with_min(width)
                    } else {
                        PanelWidth::fixed(width)
                    }
                })
                .collect();
            let at = at.min(panels.len());
            panels.insert(at, PanelWidth::auto_with_min(min_width));
            panels
        })
}

fn total(panels: &[PanelWidth]) -> u32 {
    panels.iter().map(|p| p.width).sum()
}

proptest! {
    #[test]
    fn fitting_row_fills_grid_exactly(panels in fitting_row_strategy()) {
        let balance = balance_row(&panels);
        prop_assert_eq!(balance.remaining, 0);
        prop_assert_eq!(total(&balance.panels), GRID_COLUMNS);
    }

    #[test]
    fn auto_panels_never_below_min(panels in row_strategy()) {
        let balance = balance_row(&panels);
        for panel in balance.panels.iter().filter(|p| p.auto_resize) {
            prop_assert!(panel.width >= panel.effective_min_width());
        }
    }

    #[test]
    fn fixed_panels_never_change(panels in row_strategy()) {
        let flat: Vec<PanelWidth> = layout_row(&panels).into_iter().flatten().collect();
        for (before, after) in panels.iter().zip(&flat) {
            if !before.auto_resize {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn layout_preserves_order(panels in row_strategy()) {
        let flat: Vec<PanelWidth> = layout_row(&panels).into_iter().flatten().collect();
        prop_assert_eq!(flat.len(), panels.len());
        for (before, after) in panels.iter().zip(&flat) {
            prop_assert_eq!(before.auto_resize, after.auto_resize);
            prop_assert_eq!(before.min_width, after.min_width);
        }
    }

    #[test]
    fn fitting_row_stays_one_sub_row(panels in fitting_row_strategy()) {
        let rows = layout_row(&panels);
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].len(), panels.len());
    }

    #[test]
    fn sub_rows_fit_unless_single_panel(panels in row_strategy()) {
        for row in layout_row(&panels) {
            if row.len() > 1 {
                prop_assert!(total(&row) <= GRID_COLUMNS);
            }
        }
    }

    #[test]
    fn layout_is_idempotent(panels in row_strategy()) {
        for row in layout_row(&panels) {
            let again = layout_row(&row);
            prop_assert_eq!(again.len(), 1);
            prop_assert_eq!(&again[0], &row);
        }
    }
}
