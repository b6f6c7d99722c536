use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, NetError>;

#[derive(Error, Debug)]
pub enum NetError {
    /// Weight or data dimensions that do not line up.
    #[error("shape error: {0}")]
    Shape(String),

    /// A ratio whose denominator is zero. `unit` is `None` for micro/macro aggregates.
    #[error("{metric} is undefined for {}: zero denominator", unit_label(.unit))]
    DegenerateMetric {
        metric: &'static str,
        unit: Option<usize>,
    },

    /// Numeric text that could not be read. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("csv error: {0}")]
    Csv(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn unit_label(unit: &Option<usize>) -> String {
    match unit {
        Some(k) => format!("output unit {k}"),
        None => "aggregate".to_string(),
    }
}
