use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Confusion counts for one sigmoid output unit.
///
/// - `a` — predicted positive, actually positive
/// - `b` — predicted positive, actually negative
/// - `c` — predicted negative, actually positive
/// - `d` — predicted negative, actually negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

impl ConfusionCounts {
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        ConfusionCounts { a, b, c, d }
    }

    pub fn record(&mut self, predicted_positive: bool, actual_positive: bool) {
        match (predicted_positive, actual_positive) {
            (true, true) => self.a += 1,
            (true, false) => self.b += 1,
            (false, true) => self.c += 1,
            (false, false) => self.d += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d
    }
}

impl Add for ConfusionCounts {
    type Output = ConfusionCounts;

    fn add(self, rhs: Self) -> Self::Output {
        ConfusionCounts {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
            c: self.c + rhs.c,
            d: self.d + rhs.d,
        }
    }
}

impl Sum for ConfusionCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ConfusionCounts::default(), Add::add)
    }
}
