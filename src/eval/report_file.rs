//! Metrics file: one `A B C D acc prec recall F1` line per output unit,
//! then a micro line and a macro line of `acc prec recall F1`.
//! Ratios use 3 decimals; undefined ratios are written as `nan`.

use std::path::Path;

use crate::error::Result;
use crate::eval::evaluator::EvaluationReport;
use crate::eval::metrics::Metrics;

pub fn format_report(report: &EvaluationReport) -> String {
    let mut out = String::new();
    for unit in &report.units {
        let c = unit.counts;
        out.push_str(&format!("{} {} {} {} {}\n", c.a, c.b, c.c, c.d, metric_fields(&unit.metrics)));
    }
    out.push_str(&metric_fields(&report.micro));
    out.push('\n');
    out.push_str(&metric_fields(&report.macro_avg));
    out.push('\n');
    out
}

pub fn save_report<P: AsRef<Path>>(report: &EvaluationReport, path: P) -> Result<()> {
    std::fs::write(path, format_report(report))?;
    Ok(())
}

/// Writes the full report as pretty-printed JSON.
pub fn save_report_json<P: AsRef<Path>>(report: &EvaluationReport, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), report)?;
    Ok(())
}

fn metric_fields(m: &Metrics) -> String {
    [m.accuracy, m.precision, m.recall, m.f1]
        .iter()
        .map(|v| match v {
            Some(x) => format!("{x:.3}"),
            None => "nan".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
