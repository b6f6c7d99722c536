//! Whitespace-separated numeric text shared by the weight and dataset files.

use crate::error::{NetError, Result};

/// Parses a `a b c` header of three non-negative integers.
pub fn parse_header(line: &str, line_no: usize) -> Result<[usize; 3]> {
    let values: Vec<usize> = line
        .split_whitespace()
        .map(|tok| {
            tok.parse::<usize>().map_err(|_| NetError::Parse {
                line: line_no,
                message: format!("'{tok}' is not a non-negative integer"),
            })
        })
        .collect::<Result<_>>()?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(NetError::Parse {
            line: line_no,
            message: format!("header needs 3 integers, got {}", values.len()),
        }),
    }
}

/// Parses every token on the line as a finite `f64`.
pub fn parse_floats(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|tok| match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(NetError::Parse {
                line: line_no,
                message: format!("'{tok}' is not a finite number"),
            }),
            Err(_) => Err(NetError::Parse {
                line: line_no,
                message: format!("'{tok}' is not a valid number"),
            }),
        })
        .collect()
}

/// Non-blank lines paired with their 1-based line numbers.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Joins values with single spaces using 3 decimal places.
pub fn format_row(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_needs_three_integers() {
        assert_eq!(parse_header("13 5 1", 1).unwrap(), [13, 5, 1]);
        assert!(matches!(parse_header("13 5", 1), Err(NetError::Parse { line: 1, .. })));
        assert!(matches!(parse_header("13 x 1", 4), Err(NetError::Parse { line: 4, .. })));
    }

    #[test]
    fn floats_accept_any_float_text() {
        assert_eq!(parse_floats("1 -0.5 2e-3", 2).unwrap(), vec![1.0, -0.5, 0.002]);
        assert!(parse_floats("1.0 abc", 2).is_err());
    }

    #[test]
    fn floats_must_be_finite() {
        for line in ["1.0 nan", "inf 2.0", "0.5 -inf", "NaN"] {
            assert!(matches!(parse_floats(line, 5), Err(NetError::Parse { line: 5, .. })));
        }
    }

    #[test]
    fn blank_lines_are_skipped_but_numbered() {
        let lines: Vec<_> = numbered_lines("a\n\n  b  \n").collect();
        assert_eq!(lines, vec![(1, "a"), (3, "b")]);
    }

    #[test]
    fn rows_use_three_decimals() {
        assert_eq!(format_row(&[0.12345, -1.0, 2.0006]), "0.123 -1.000 2.001");
    }
}
