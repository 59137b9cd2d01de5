// Tabular import: delimited text -> rows -> typed records.
//
// `tabular` turns raw bytes into labelled rows, `infer` maps each row's
// columns onto record fields using the alias tables in `aliases`.

pub mod aliases;
mod infer;
pub mod tabular;

use std::fmt;

use thiserror::Error;

pub use infer::{infer_column, Importer};
pub use tabular::parse_rows;

// ---------------------------------------------------------------------------
// Row
// ---------------------------------------------------------------------------

/// One parsed row: `(column label, cell value)` pairs in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Build a row from borrowed pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn labels(&self) -> Vec<&str> {
        self.cells.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Value of the first column with exactly this label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Record kinds
// ---------------------------------------------------------------------------

/// The record shape an import targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Game,
    PlateAppearance,
    Pitching,
    Player,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Game,
        RecordKind::PlateAppearance,
        RecordKind::Pitching,
        RecordKind::Player,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Game => "game",
            RecordKind::PlateAppearance => "plate-appearance",
            RecordKind::Pitching => "pitching",
            RecordKind::Player => "player",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A row-level problem reported by the tabular parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based line number in the source text.
    pub line: u64,
    pub message: String,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

fn join_issues(issues: &[ParseIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// A column belongs to a different record kind; nothing is imported.
    #[error(
        "column \"{column}\" looks like {found} data, not {target} data; \
         re-run the import as {found}"
    )]
    ShapeMismatch {
        target: RecordKind,
        found: RecordKind,
        column: String,
    },

    #[error("could not parse input ({} issue(s)): {}", .0.len(), join_issues(.0))]
    Parse(Vec<ParseIssue>),

    #[error("no player-name column found")]
    MissingNameColumn,

    #[error("unknown import mode: {mode} (expected add, overwrite or replace)")]
    UnknownMode { mode: String },
}

impl From<Vec<ParseIssue>> for ImportError {
    fn from(issues: Vec<ParseIssue>) -> Self {
        ImportError::Parse(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lookup_is_by_exact_label() {
        let row = Row::from_pairs(&[("date", "2026-01-12"), ("Opponent", "東町")]);
        assert_eq!(row.get("date"), Some("2026-01-12"));
        assert_eq!(row.get("opponent"), None);
        assert_eq!(row.labels(), ["date", "Opponent"]);
        assert_eq!(row.len(), 2);
        assert_eq!(
            row.cells(),
            [
                ("date".to_string(), "2026-01-12".to_string()),
                ("Opponent".to_string(), "東町".to_string()),
            ]
        );
        assert!(Row::default().is_empty());
    }

    #[test]
    fn shape_mismatch_message_names_both_kinds() {
        let err = ImportError::ShapeMismatch {
            target: RecordKind::Pitching,
            found: RecordKind::PlateAppearance,
            column: "打点".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("打点"));
        assert!(msg.contains("plate-appearance data"));
        assert!(msg.contains("not pitching data"));
    }

    #[test]
    fn parse_error_lists_every_issue() {
        let err = ImportError::from(vec![
            ParseIssue { line: 3, message: "bad".to_string() },
            ParseIssue { line: 7, message: "worse".to_string() },
        ]);
        assert_eq!(
            err.to_string(),
            "could not parse input (2 issue(s)): line 3: bad; line 7: worse"
        );
    }
}
