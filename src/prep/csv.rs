//! CSV reading for dataset preparation.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Mandatory header row naming every column
//! - Double-quoted fields with embedded commas are handled correctly
//! - The target column holds `0` or `1`

use crate::error::{NetError, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Feature matrix and binary target column pulled out of a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub feature_names: Vec<String>,
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV text into a feature matrix and target column.
///
/// # Arguments
/// - `text`     — CSV content with a header row
/// - `target`   — name of the 0/1 label column
/// - `features` — columns to keep, in order; `None` keeps every non-target column
pub fn parse_csv(text: &str, target: &str, features: Option<&[String]>) -> Result<Table> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header: Vec<String> = match lines.next() {
        Some(line) => parse_csv_row(line).into_iter().map(|c| c.trim().to_string()).collect(),
        None => return Err(NetError::Csv("CSV file is empty".into())),
    };

    let column = |name: &str| -> Result<usize> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| NetError::Csv(format!("no column named '{name}'")))
    };

    let target_idx = column(target)?;
    let feature_names: Vec<String> = match features {
        Some(names) => names.to_vec(),
        None => header.iter().filter(|h| h.as_str() != target).cloned().collect(),
    };
    if feature_names.is_empty() {
        return Err(NetError::Csv("no feature columns selected".into()));
    }
    if feature_names.iter().any(|n| n == target) {
        return Err(NetError::Csv(format!("target column '{target}' cannot also be a feature")));
    }
    let feature_idx = feature_names
        .iter()
        .map(|name| column(name))
        .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::new();
    let mut targets = Vec::new();

    for (row_idx, line) in lines.enumerate() {
        let row_num = row_idx + 1;
        let cells = parse_csv_row(line.trim());
        if cells.len() != header.len() {
            return Err(NetError::Csv(format!(
                "Row {}: expected {} columns, got {}",
                row_num,
                header.len(),
                cells.len()
            )));
        }

        let label = parse_cell(&cells[target_idx], row_num)?;
        if label != 0.0 && label != 1.0 {
            return Err(NetError::Csv(format!(
                "Row {}: target '{}' is not 0 or 1",
                row_num,
                cells[target_idx].trim()
            )));
        }

        let feats = feature_idx
            .iter()
            .map(|&i| parse_cell(&cells[i], row_num))
            .collect::<Result<Vec<_>>>()?;

        rows.push(feats);
        targets.push(label);
    }

    if rows.is_empty() {
        return Err(NetError::Csv("CSV contains no data rows after parsing".into()));
    }

    Ok(Table { feature_names, features: rows, targets })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_cell(cell: &str, row_num: usize) -> Result<f64> {
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(NetError::Csv(format!("Row {}: '{}' is not a finite number", row_num, cell))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEART: &str = "age,sex,chol,target\n63,1,233,1\n37,1,250,1\n41,0,204,0\n";

    #[test]
    fn defaults_to_every_non_target_column() {
        let table = parse_csv(HEART, "target", None).unwrap();
        assert_eq!(table.feature_names, vec!["age", "sex", "chol"]);
        assert_eq!(table.features[2], vec![41.0, 0.0, 204.0]);
        assert_eq!(table.targets, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn selected_columns_keep_requested_order() {
        let cols = vec!["chol".to_string(), "age".to_string()];
        let table = parse_csv(HEART, "target", Some(cols.as_slice())).unwrap();
        assert_eq!(table.features[0], vec![233.0, 63.0]);
    }

    #[test]
    fn quoted_cells_may_contain_commas() {
        assert_eq!(parse_csv_row(r#"1,"a,b",3"#), vec!["1", "a,b", "3"]);
        assert_eq!(parse_csv_row(r#""say ""hi""",2"#), vec![r#"say "hi""#, "2"]);
    }

    #[test]
    fn unknown_column_is_an_error() {
        assert!(matches!(parse_csv(HEART, "label", None), Err(NetError::Csv(_))));
    }

    #[test]
    fn target_cannot_be_selected_as_feature() {
        let cols = vec!["x".to_string(), "target".to_string()];
        let err = parse_csv("x,target\n1,1\n2,0\n", "target", Some(cols.as_slice()));
        assert!(matches!(err, Err(NetError::Csv(msg)) if msg.contains("target")));
    }

    #[test]
    fn non_binary_target_is_an_error() {
        let text = "x,target\n1.0,2\n";
        assert!(matches!(parse_csv(text, "target", None), Err(NetError::Csv(_))));
    }

    #[test]
    fn non_finite_cells_are_rejected() {
        for bad in ["nan", "inf", "-inf"] {
            let text = format!("x,target\n{bad},1\n");
            assert!(matches!(parse_csv(&text, "target", None), Err(NetError::Csv(_))));
        }
    }

    #[test]
    fn ragged_row_is_an_error() {
        let text = "x,y,target\n1.0,1\n";
        assert!(matches!(parse_csv(text, "target", None), Err(NetError::Csv(_))));
    }
}
