// ABOUTME: Dashboard row model driving the layout engine.
// ABOUTME: Tracks a row's panels and re-lays them out when the panel set changes.

use grid_core::PanelWidth;

use crate::RowEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

/// A panel placed in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPanel {
    pub id: PanelId,
    pub width: PanelWidth,
}

impl RowPanel {
    pub fn new(id: u64, width: PanelWidth) -> Self {
        Self {
            id: PanelId(id),
            width,
        }
    }
}

/// Notifications produced by row changes, for the caller to dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    PanelAdded(PanelId),
    PanelRemoved(PanelId),
    SpanChanged,
}

#[derive(Debug, Clone)]
pub struct Row {
    pub title: String,
    pub show_title: bool,
    pub title_size: String,
    pub height: u32,
    pub collapse: bool,
    panels: Vec<RowPanel>,
    /// Total width of all panels, across sub-rows
    span: u64,
    /// Number of panels in each sub-row from the last layout
    sub_row_lens: Vec<usize>,
    engine: RowEngine,
}

impl Row {
    pub fn new(panels: Vec<RowPanel>) -> Self {
        Self::with_engine(RowEngine::default(), panels)
    }

    pub fn with_engine(engine: RowEngine, panels: Vec<RowPanel>) -> Self {
        let mut row = Self {
            title: "Dashboard Row".to_string(),
            show_title: false,
            title_size: "h6".to_string(),
            height: 250,
            collapse: false,
            sub_row_lens: vec![panels.len()],
            panels,
            span: 0,
            engine,
        };
        row.update_row_span();
        row
    }

    pub fn panels(&self) -> &[RowPanel] {
        &self.panels
    }

    pub fn span(&self) -> u64 {
        self.span
    }

    /// Panels grouped by the sub-row they were placed in
    pub fn sub_rows(&self) -> Vec<&[RowPanel]> {
        let mut rest = self.panels.as_slice();
        let mut rows = Vec::with_capacity(self.sub_row_lens.len());
        for &len in &self.sub_row_lens {
            let (row, tail) = rest.split_at(len.min(rest.len()));
            rows.push(row);
            rest = tail;
        }
        rows
    }

    pub fn update_row_span(&mut self) {
        self.span = self.panels.iter().map(|p| u64::from(p.width.width)).sum();
    }

    /// Re-lay out the panels after a width or membership change
    pub fn panel_span_changed(&mut self, always_notify: bool) -> Vec<RowEvent> {
        self.resize_panels();
        let old_span = self.span;
        self.update_row_span();

        if always_notify || old_span != self.span {
            vec![RowEvent::SpanChanged]
        } else {
            Vec::new()
        }
    }

    pub fn add_panel(&mut self, panel: RowPanel) -> Vec<RowEvent> {
        self.panels.push(panel);
        let mut events = vec![RowEvent::PanelAdded(panel.id)];
        events.extend(self.panel_span_changed(false));
        events
    }

    /// Remove a panel by id. Unknown ids leave the row untouched.
    pub fn remove_panel(&mut self, id: PanelId) -> Vec<RowEvent> {
        let Some(index) = self.panels.iter().position(|p| p.id == id) else {
            return Vec::new();
        };
        self.panels.remove(index);
        let mut events = vec![RowEvent::PanelRemoved(id)];
        events.extend(self.panel_span_changed(false));
        events
    }

    /// Move the panel at `from` to index `to`. A `to` past the end appends.
    pub fn move_panel(&mut self, from: usize, to: usize) {
        if from >= self.panels.len() {
            return;
        }
        let panel = self.panels.remove(from);
        let to = to.min(self.panels.len());
        self.panels.insert(to, panel);
    }

    pub fn toggle_collapse(&mut self) {
        self.collapse = !self.collapse;
    }

    pub fn copy_properties_from(&mut self, source: &Row) {
        self.height = source.height;
        self.title = source.title.clone();
        self.show_title = source.show_title;
        self.title_size = source.title_size.clone();
    }

    fn resize_panels(&mut self) {
        let widths: Vec<PanelWidth> = self.panels.iter().map(|p| p.width).collect();
        let rows = self.engine.layout(&widths);

        self.sub_row_lens = rows.iter().map(Vec::len).collect();
        for (panel, width) in self.panels.iter_mut().zip(rows.into_iter().flatten()) {
            panel.width = width;
        }
        tracing::debug!(
            "Laid out {} panels into {} sub-rows",
            self.panels.len(),
            self.sub_row_lens.len()
        );
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
