pub mod confusion;
pub mod evaluator;
pub mod metrics;
pub mod report_file;

pub use confusion::ConfusionCounts;
pub use evaluator::{confusion_counts, evaluate, EvaluateConfig, EvaluationReport, UnitReport, DEFAULT_THRESHOLD};
pub use metrics::{MetricPolicy, Metrics};
pub use report_file::{format_report, save_report, save_report_json};
