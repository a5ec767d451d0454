use serde::Serialize;

use crate::trial::TrialResult;
use crate::util::{mean, min_max, std_dev};

/// How steady typing speed was across trials, judged by the wpm range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
pub enum SpeedConsistency {
    #[strum(to_string = "extremely consistent in typing speed")]
    Extreme,
    #[strum(to_string = "consistent in typing speed")]
    Consistent,
    #[strum(to_string = "not very consistent in typing speed")]
    NotVery,
    #[strum(to_string = "not consistent in typing speed")]
    Inconsistent,
}

impl SpeedConsistency {
    pub fn from_range(wpm_range: f64) -> Self {
        if wpm_range < 5.0 {
            Self::Extreme
        } else if wpm_range < 10.0 {
            Self::Consistent
        } else if wpm_range < 20.0 {
            Self::NotVery
        } else {
            Self::Inconsistent
        }
    }
}

/// How steady accuracy was across trials, judged by the accuracy range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyConsistency {
    #[strum(to_string = "extremely consistent in accuracy")]
    Extreme,
    #[strum(to_string = "consistent in accuracy")]
    Consistent,
    #[strum(to_string = "not very consistent in accuracy")]
    NotVery,
    #[strum(to_string = "not consistent in accuracy")]
    Inconsistent,
}

impl AccuracyConsistency {
    pub fn from_range(accuracy_range: f64) -> Self {
        if accuracy_range < 0.05 {
            Self::Extreme
        } else if accuracy_range < 0.10 {
            Self::Consistent
        } else if accuracy_range < 0.20 {
            Self::NotVery
        } else {
            Self::Inconsistent
        }
    }
}

/// Aggregate of every trial in a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub average_wpm: f64,
    pub average_accuracy: f64,
    pub min_wpm: f64,
    pub max_wpm: f64,
    pub min_accuracy: f64,
    pub max_accuracy: f64,
    pub wpm_range: f64,
    pub accuracy_range: f64,
    pub wpm_std_dev: f64,
    pub speed_consistency: SpeedConsistency,
    pub accuracy_consistency: AccuracyConsistency,
    pub results: Vec<TrialResult>,
}

impl Summary {
    /// Returns `None` when there are no results to aggregate
    pub fn from_results(results: &[TrialResult]) -> Option<Self> {
        let wpms: Vec<f64> = results.iter().map(|r| r.wpm).collect();
        let accuracies: Vec<f64> = results.iter().map(|r| r.accuracy).collect();

        let (min_wpm, max_wpm) = min_max(&wpms)?;
        let (min_accuracy, max_accuracy) = min_max(&accuracies)?;
        let wpm_range = max_wpm - min_wpm;
        let accuracy_range = max_accuracy - min_accuracy;

        Some(Self {
            trials: results.len(),
            average_wpm: mean(&wpms)?,
            average_accuracy: mean(&accuracies)?,
            min_wpm,
            max_wpm,
            min_accuracy,
            max_accuracy,
            wpm_range,
            accuracy_range,
            wpm_std_dev: std_dev(&wpms)?,
            speed_consistency: SpeedConsistency::from_range(wpm_range),
            accuracy_consistency: AccuracyConsistency::from_range(accuracy_range),
            results: results.to_vec(),
        })
    }

    /// e.g. "You were consistent in typing speed and extremely consistent in accuracy."
    pub fn consistency_sentence(&self) -> String {
        format!(
            "You were {} and {}.",
            self.speed_consistency, self.accuracy_consistency
        )
    }
}
