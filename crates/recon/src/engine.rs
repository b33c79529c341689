use crate::config::ReconcileConfig;
use crate::error::LabelError;
use crate::ground_truth::parse_ground_truth;
use crate::model::{Accuracy, GroundTruth, Mismatch, Predictions, ReconReport};
use crate::predictions::parse_predictions;

/// Load both inputs per config and reconcile them.
///
/// Both files are parsed before anything is compared, so a parse failure in
/// either one surfaces before a report exists.
pub fn run(config: &ReconcileConfig) -> Result<ReconReport, LabelError> {
    let markers = config.markers();
    markers.validate()?;
    let predictions = parse_predictions(&config.predictions, &markers)?;
    let ground_truth = parse_ground_truth(&config.labels)?;
    Ok(reconcile(&predictions, &ground_truth))
}

/// Compare predictions against ground truth by file name.
///
/// Name lists and mismatches come out in file-name order.
pub fn reconcile(predictions: &Predictions, ground_truth: &GroundTruth) -> ReconReport {
    let mut in_both = Vec::new();
    let mut only_in_predictions = Vec::new();
    let mut mismatches = Vec::new();

    for (name, &predicted) in predictions {
        match ground_truth.get(name) {
            Some(&truth) => {
                if predicted != truth {
                    mismatches.push(Mismatch {
                        file_name: name.clone(),
                        predicted,
                        truth,
                    });
                }
                in_both.push(name.clone());
            }
            None => only_in_predictions.push(name.clone()),
        }
    }

    let only_in_ground_truth: Vec<String> = ground_truth
        .keys()
        .filter(|name| !predictions.contains_key(*name))
        .cloned()
        .collect();

    let accuracy = Accuracy::compute(in_both.len(), mismatches.len());
    log::debug!(
        "reconciled: {} shared, {} prediction-only, {} label-only, {} mismatched",
        in_both.len(),
        only_in_predictions.len(),
        only_in_ground_truth.len(),
        mismatches.len(),
    );

    ReconReport {
        prediction_count: predictions.len(),
        ground_truth_count: ground_truth.len(),
        in_both,
        only_in_predictions,
        only_in_ground_truth,
        mismatches,
        accuracy,
    }
}
