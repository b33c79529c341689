use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Predicted class per file name, parsed from the training log.
pub type Predictions = BTreeMap<String, i64>;

/// True class per file name, parsed from the labels CSV.
pub type GroundTruth = BTreeMap<String, i64>;

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// A file present on both sides whose classes disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub file_name: String,
    pub predicted: i64,
    pub truth: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
    pub percent: f64,
}

impl Accuracy {
    /// `total` is the number of files present on both sides. Zero overlap
    /// reports 0% instead of dividing by zero.
    pub fn compute(total: usize, mismatches: usize) -> Self {
        let correct = total.saturating_sub(mismatches);
        let percent = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };
        Self { correct, total, percent }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconReport {
    pub prediction_count: usize,
    pub ground_truth_count: usize,
    pub in_both: Vec<String>,
    pub only_in_predictions: Vec<String>,
    pub only_in_ground_truth: Vec<String>,
    pub mismatches: Vec<Mismatch>,
    pub accuracy: Accuracy,
}

impl ReconReport {
    pub fn all_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// True when any name is one-sided or any class disagrees.
    pub fn has_differences(&self) -> bool {
        !self.mismatches.is_empty()
            || !self.only_in_predictions.is_empty()
            || !self.only_in_ground_truth.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChairReport {
    /// Distinct tokens, ascending by integer value, original text kept.
    pub identifiers: Vec<String>,
    pub total: usize,
}
