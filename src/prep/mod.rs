pub mod csv;
pub mod split;

pub use csv::{parse_csv, Table};
pub use split::{train_test_split, PreparedData, Standardizer};
