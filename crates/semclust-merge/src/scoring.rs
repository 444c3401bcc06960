//! Accuracy against ground truth and the attachment-threshold sweep.

use semclust_core::constants::{SWEEP_END, SWEEP_START, SWEEP_STEP};
use semclust_core::errors::MergeError;
use semclust_core::models::SweepPoint;

fn check_lengths(what: &str, expected: usize, actual: usize) -> Result<(), MergeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(MergeError::LengthMismatch {
            what: what.to_string(),
            expected,
            actual,
        })
    }
}

/// Fraction of positions where `predicted` matches `truth`. 0.0 for no
/// predictions.
pub fn accuracy(truth: &[i32], predicted: &[i32]) -> Result<f64, MergeError> {
    check_lengths("ground truth labels", predicted.len(), truth.len())?;
    if predicted.is_empty() {
        return Ok(0.0);
    }
    let matches = truth.iter().zip(predicted).filter(|(t, p)| t == p).count();
    Ok(matches as f64 / predicted.len() as f64)
}

/// Thresholds `0.01, 0.03, …` strictly below `0.95`.
pub fn sweep_thresholds() -> Vec<f64> {
    (0..)
        .map(|i| SWEEP_START + i as f64 * SWEEP_STEP)
        .take_while(|&t| t < SWEEP_END - 1e-9)
        .collect()
}

/// Sweep the attachment threshold.
///
/// At each threshold, `accuracy` counts correct predictions among variables
/// whose average similarity is strictly above it (1.0 when none are), and
/// the raw assignment rate is correct-and-above over all variables. Rates
/// are divided by the rate at the first threshold; a zero first rate leaves
/// every normalized value at 0.0.
pub fn threshold_sweep(
    truth: &[i32],
    predicted: &[i32],
    average_similarity: &[f64],
) -> Result<Vec<SweepPoint>, MergeError> {
    check_lengths("ground truth labels", predicted.len(), truth.len())?;
    check_lengths("average similarities", predicted.len(), average_similarity.len())?;
    let n = predicted.len();

    let mut points: Vec<SweepPoint> = sweep_thresholds()
        .into_iter()
        .map(|threshold| {
            let mut above = 0usize;
            let mut correct = 0usize;
            for i in 0..n {
                if average_similarity[i] > threshold {
                    above += 1;
                    if truth[i] == predicted[i] {
                        correct += 1;
                    }
                }
            }
            SweepPoint {
                threshold,
                accuracy: if above == 0 { 1.0 } else { correct as f64 / above as f64 },
                normalized_assignments: if n == 0 { 0.0 } else { correct as f64 / n as f64 },
            }
        })
        .collect();

    let first = points.first().map_or(0.0, |p| p.normalized_assignments);
    for p in &mut points {
        p.normalized_assignments = if first == 0.0 {
            0.0
        } else {
            p.normalized_assignments / first
        };
    }
    Ok(points)
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else if x == 0.0 {
        0
    } else {
        // NaN
        2
    }
}

/// Threshold at which `normalized_assignments - accuracy` first changes sign
/// (the point before the change). `None` when the curves never cross.
pub fn intersection_threshold(points: &[SweepPoint]) -> Option<f64> {
    points
        .windows(2)
        .find(|w| {
            sign(w[0].normalized_assignments - w[0].accuracy)
                != sign(w[1].normalized_assignments - w[1].accuracy)
        })
        .map(|w| w[0].threshold)
}
