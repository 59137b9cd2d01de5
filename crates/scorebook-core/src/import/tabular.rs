// Delimited-text reader producing labelled rows.

use csv::{ReaderBuilder, StringRecord};

use super::{ParseIssue, Row};

fn clean_label(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Parse comma-separated bytes into rows.
///
/// With `has_headers`, the first non-blank record supplies column labels
/// (byte-order mark and surrounding whitespace removed). Without it,
/// columns are labelled `"0"`, `"1"`, ... and the first record is data.
/// Blank lines are skipped. Every record whose width differs from the
/// header's is reported; nothing is returned unless all records parse.
pub fn parse_rows(bytes: &[u8], has_headers: bool) -> Result<Vec<Row>, Vec<ParseIssue>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut labels: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut issues = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                issues.push(ParseIssue {
                    line,
                    message: err.to_string(),
                });
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);

        if labels.is_none() {
            if has_headers {
                labels = Some(record.iter().map(clean_label).collect());
                continue;
            }
            labels = Some((0..record.len()).map(|i| i.to_string()).collect());
        }
        let Some(header) = labels.as_ref() else {
            continue;
        };

        if record.len() != header.len() {
            issues.push(ParseIssue {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    header.len(),
                    record.len()
                ),
            });
            continue;
        }

        rows.push(Row::new(
            header
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        ));
    }

    if issues.is_empty() {
        Ok(rows)
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_label_each_cell() {
        let rows = parse_rows(b"date,opponent\n2026-01-12,East\n2026-01-19,West\n", true)
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("opponent"), Some("West"));
    }

    #[test]
    fn bom_and_whitespace_are_stripped_from_headers() {
        let text = "\u{feff} date , 対戦相手 \n2026-01-12,東町\n";
        let rows = parse_rows(text.as_bytes(), true).unwrap();
        assert_eq!(rows[0].labels(), ["date", "対戦相手"]);
        assert_eq!(rows[0].get("対戦相手"), Some("東町"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_rows(b"a,b\n\n1,2\n,\n3,4\n", true).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("a"), Some("3"));
    }

    #[test]
    fn ragged_rows_are_all_reported() {
        let issues = parse_rows(b"a,b\n1,2\n3\n4,5,6\n", true).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].line, 3);
        assert_eq!(issues[1].line, 4);
        assert!(issues[0].message.contains("expected 2 fields, found 1"));
    }

    #[test]
    fn without_headers_columns_are_indexed() {
        let rows = parse_rows(b"x,y\n1,2\n", false).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].labels(), ["0", "1"]);
        assert_eq!(rows[0].get("0"), Some("x"));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let rows = parse_rows(b"name,note\n\"Tanaka, S\",ok\n", true).unwrap();
        assert_eq!(rows[0].get("name"), Some("Tanaka, S"));
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        assert!(parse_rows(b"a,b\n", true).unwrap().is_empty());
        assert!(parse_rows(b"", true).unwrap().is_empty());
    }
}
