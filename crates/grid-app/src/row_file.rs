// ABOUTME: Row description files read by the command line tool.
// ABOUTME: Accepts a `panels` list in TOML or JSON, chosen by file extension.

use std::path::Path;

use anyhow::{Context, Result};
use grid_core::PanelWidth;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowFile {
    #[serde(default)]
    pub panels: Vec<PanelWidth>,
}

impl RowFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read row file {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// One line per sub-row, e.g. `row 1: [8, 4]`
pub fn format_rows(rows: &[Vec<PanelWidth>]) -> String {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let widths: Vec<String> = row.iter().map(|p| p.width.to_string()).collect();
            format!("row {}: [{}]", i + 1, widths.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_panels() {
        let file = RowFile::from_toml(
            r#"
            [[panels]]
            width = 3

            [[panels]]
            auto_resize = true
            min_width = 6
            "#,
        )
        .unwrap();
        assert_eq!(
            file.panels,
            vec![PanelWidth::fixed(3), PanelWidth::auto_with_min(6)]
        );
    }

    #[test]
    fn parses_json_panels() {
        let file = RowFile::from_json(r#"{"panels": [{"auto_resize": true}]}"#).unwrap();
        assert_eq!(file.panels, vec![PanelWidth::auto()]);
    }

    #[test]
    fn loads_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("row.json");
        std::fs::write(&path, r#"{"panels": [{"width": 5}]}"#).unwrap();

        let file = RowFile::load(&path).unwrap();
        assert_eq!(file.panels, vec![PanelWidth::fixed(5)]);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = RowFile::load(Path::new("/nonexistent/row.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/row.toml"));
    }

    #[test]
    fn formats_sub_rows() {
        let rows = vec![
            vec![PanelWidth::fixed(12)],
            vec![PanelWidth::fixed(8), PanelWidth::fixed(4)],
        ];
        assert_eq!(format_rows(&rows), "row 1: [12]\nrow 2: [8, 4]");
    }
}
