pub mod dataset;
pub mod text;

pub use dataset::{format_dataset, load_dataset, parse_dataset, save_dataset, Dataset, Example};
