use std::path::Path;

use tracing::debug;

use crate::data::text::{format_row, numbered_lines, parse_floats, parse_header};
use crate::error::{NetError, Result};
use crate::network::Network;

/// One labelled row: features followed by one 0/1 target per output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub features: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Example {
    /// Splits a raw `features ++ targets` row. Targets must be exactly 0.0 or 1.0.
    pub fn from_row(mut row: Vec<f64>, n_outputs: usize) -> Result<Example> {
        if row.len() <= n_outputs {
            return Err(NetError::Shape(format!(
                "row has {} values, need at least one feature plus {n_outputs} targets",
                row.len()
            )));
        }
        let targets = row.split_off(row.len() - n_outputs);
        if let Some(t) = targets.iter().find(|t| **t != 0.0 && **t != 1.0) {
            return Err(NetError::Shape(format!("target {t} is not 0 or 1")));
        }
        Ok(Example { features: row, targets })
    }
}

/// An ordered set of examples with uniform feature and target widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub examples: Vec<Example>,
    pub n_features: usize,
    pub n_outputs: usize,
}

impl Dataset {
    pub fn new(examples: Vec<Example>, n_features: usize, n_outputs: usize) -> Result<Dataset> {
        for (i, ex) in examples.iter().enumerate() {
            if ex.features.len() != n_features || ex.targets.len() != n_outputs {
                return Err(NetError::Shape(format!(
                    "example {i} has {} features and {} targets, expected {n_features} and {n_outputs}",
                    ex.features.len(),
                    ex.targets.len()
                )));
            }
        }
        Ok(Dataset { examples, n_features, n_outputs })
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Fails unless the rows fit the network's input and output widths.
    pub fn check_against(&self, network: &Network) -> Result<()> {
        if self.n_features != network.input_size() {
            return Err(NetError::Shape(format!(
                "dataset has {} features, network expects {}",
                self.n_features,
                network.input_size()
            )));
        }
        if self.n_outputs != network.output_size() {
            return Err(NetError::Shape(format!(
                "dataset has {} targets, network has {} output units",
                self.n_outputs,
                network.output_size()
            )));
        }
        Ok(())
    }
}

/// Parses dataset text: a `n_rows n_features n_outputs` header then one row per line.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut lines = numbered_lines(text);
    let (line_no, header) = lines
        .next()
        .ok_or_else(|| NetError::Shape("dataset file is empty".into()))?;
    let [n_rows, n_features, n_outputs] = parse_header(header, line_no)?;

    let mut examples = Vec::with_capacity(n_rows);
    for (line_no, line) in lines {
        let row = parse_floats(line, line_no)?;
        if row.len() != n_features + n_outputs {
            return Err(NetError::Shape(format!(
                "line {line_no}: expected {} values, got {}",
                n_features + n_outputs,
                row.len()
            )));
        }
        examples.push(Example::from_row(row, n_outputs)?);
    }
    if examples.len() != n_rows {
        return Err(NetError::Shape(format!(
            "header declares {n_rows} rows, file has {}",
            examples.len()
        )));
    }
    Dataset::new(examples, n_features, n_outputs)
}

/// Renders a dataset: features to 3 decimals, targets as integers.
pub fn format_dataset(dataset: &Dataset) -> String {
    let mut out = format!("{} {} {}\n", dataset.len(), dataset.n_features, dataset.n_outputs);
    for ex in &dataset.examples {
        out.push_str(&format_row(&ex.features));
        for t in &ex.targets {
            out.push_str(&format!(" {}", *t as u8));
        }
        out.push('\n');
    }
    out
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let dataset = parse_dataset(&std::fs::read_to_string(path)?)?;
    debug!(path = %path.display(), rows = dataset.len(), "dataset loaded");
    Ok(dataset)
}

pub fn save_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    std::fs::write(path, format_dataset(dataset))?;
    Ok(())
}
