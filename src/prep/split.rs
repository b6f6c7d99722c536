use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::data::dataset::{Dataset, Example};
use crate::error::{NetError, Result};
use crate::prep::csv::Table;

/// Per-column mean and sample standard deviation of the training rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
}

impl Standardizer {
    /// Fits column statistics using the `n - 1` denominator.
    ///
    /// A column with zero spread (or a single row) keeps a scale of `1.0`.
    pub fn fit(rows: &[Vec<f64>]) -> Standardizer {
        let n = rows.len() as f64;
        let width = rows.first().map_or(0, Vec::len);

        let mean: Vec<f64> = (0..width)
            .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n)
            .collect();
        let std_dev = (0..width)
            .map(|j| {
                if rows.len() < 2 {
                    return 1.0;
                }
                let var = rows.iter().map(|r| (r[j] - mean[j]).powi(2)).sum::<f64>() / (n - 1.0);
                if var > 0.0 { var.sqrt() } else { 1.0 }
            })
            .collect();

        Standardizer { mean, std_dev }
    }

    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.mean.iter().zip(self.std_dev.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }
}

/// Shuffled, standardized train and test sets with a single 0/1 target.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedData {
    pub train: Dataset,
    pub test: Dataset,
    pub standardizer: Standardizer,
}

/// Shuffles the table, holds out `ceil(n * test_fraction)` rows for testing,
/// and standardizes both sets with statistics fitted on the training rows.
pub fn train_test_split<R: Rng>(table: Table, test_fraction: f64, rng: &mut R) -> Result<PreparedData> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(NetError::Config(format!(
            "test fraction must lie strictly between 0 and 1, got {test_fraction}"
        )));
    }

    let mut rows: Vec<(Vec<f64>, f64)> = table.features.into_iter().zip(table.targets).collect();
    rows.shuffle(rng);

    let n_test = (rows.len() as f64 * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= rows.len() {
        return Err(NetError::Config(format!(
            "cannot split {} rows into non-empty train and test sets",
            rows.len()
        )));
    }
    let train_rows = rows.split_off(n_test);
    let test_rows = rows;

    let train_features: Vec<Vec<f64>> = train_rows.iter().map(|(f, _)| f.clone()).collect();
    let standardizer = Standardizer::fit(&train_features);

    let n_features = table.feature_names.len();
    let to_dataset = |rows: Vec<(Vec<f64>, f64)>| -> Result<Dataset> {
        let examples = rows
            .into_iter()
            .map(|(f, t)| Example { features: standardizer.transform(&f), targets: vec![t] })
            .collect();
        Dataset::new(examples, n_features, 1)
    };

    let train = to_dataset(train_rows)?;
    let test = to_dataset(test_rows)?;
    info!(train = train.len(), test = test.len(), features = n_features, "dataset split");

    Ok(PreparedData { train, test, standardizer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table(n: usize) -> Table {
        Table {
            feature_names: vec!["x".into(), "k".into()],
            features: (0..n).map(|i| vec![i as f64, 7.0]).collect(),
            targets: (0..n).map(|i| (i % 2) as f64).collect(),
        }
    }

    #[test]
    fn standardizer_uses_sample_deviation() {
        let s = Standardizer::fit(&[vec![1.0], vec![2.0], vec![3.0]]);
        assert_abs_diff_eq!(s.mean[0], 2.0);
        assert_abs_diff_eq!(s.std_dev[0], 1.0);
        assert_eq!(s.transform(&[4.0]), vec![2.0]);
    }

    #[test]
    fn constant_column_is_centered_only() {
        let s = Standardizer::fit(&[vec![5.0], vec![5.0]]);
        assert_eq!(s.std_dev[0], 1.0);
        assert_eq!(s.transform(&[6.0]), vec![1.0]);
    }

    #[test]
    fn split_sizes_round_test_set_up() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = train_test_split(table(10), 0.25, &mut rng).unwrap();
        assert_eq!(data.test.len(), 3);
        assert_eq!(data.train.len(), 7);
        assert_eq!(data.train.n_features, 2);
        assert_eq!(data.train.n_outputs, 1);
    }

    #[test]
    fn training_features_are_standardized() {
        let mut rng = StdRng::seed_from_u64(11);
        let data = train_test_split(table(40), 0.25, &mut rng).unwrap();
        let col: Vec<f64> = data.train.examples.iter().map(|e| e.features[0]).collect();
        let mean = col.iter().sum::<f64>() / col.len() as f64;
        let var = col.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (col.len() - 1) as f64;
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(var, 1.0, epsilon = 1e-9);
        assert!(data.train.examples.iter().all(|e| e.features[1] == 0.0));
    }

    #[test]
    fn seeded_split_is_reproducible() {
        let a = train_test_split(table(20), 0.3, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = train_test_split(table(20), 0.3, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fraction_must_leave_both_sets_non_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(train_test_split(table(10), 0.0, &mut rng), Err(NetError::Config(_))));
        assert!(matches!(train_test_split(table(1), 0.5, &mut rng), Err(NetError::Config(_))));
    }
}
