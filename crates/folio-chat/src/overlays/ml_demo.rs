//! Interactive classifier panel.
//!
//! A fixed three-weight logistic model scores three feature sliders in
//! `[0, 1]`. Recorded predictions are kept newest first, at most
//! [`HISTORY_LIMIT`] of them.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ChatError;
use crate::random::RandomSource;

pub const FEATURE_NAMES: [&str; 3] = ["Experience Level", "Project Complexity", "Technology Stack"];
pub const DEFAULT_FEATURES: [f64; 3] = [0.5, 0.3, 0.7];
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub probability: f64,
    pub label: Label,
    /// Distance from the decision boundary, scaled to `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogisticClassifier {
    weights: [f64; 3],
    bias: f64,
}

impl Default for LogisticClassifier {
    fn default() -> Self {
        Self {
            weights: [0.5, -0.3, 0.8],
            bias: 0.1,
        }
    }
}

impl LogisticClassifier {
    pub fn predict(&self, features: &[f64; 3]) -> Prediction {
        let logit = features
            .iter()
            .zip(self.weights)
            .fold(self.bias, |sum, (x, w)| sum + x * w);
        let probability = 1.0 / (1.0 + (-logit).exp());
        let label = if probability > 0.5 {
            Label::Positive
        } else {
            Label::Negative
        };
        Prediction {
            probability,
            label,
            confidence: (probability - 0.5).abs() * 2.0,
        }
    }

    /// Each weight's share of the total absolute weight.
    pub fn feature_importance(&self) -> [FeatureImportance; 3] {
        let total: f64 = self.weights.iter().map(|w| w.abs()).sum();
        std::array::from_fn(|i| FeatureImportance {
            feature: FEATURE_NAMES[i],
            importance: self.weights[i].abs() / total,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub features: [f64; 3],
    pub prediction: Prediction,
    pub recorded_at: DateTime<Utc>,
}

/// Slider state plus prediction history for the panel.
#[derive(Debug, Clone, Serialize)]
pub struct MlDemo {
    classifier: LogisticClassifier,
    features: [f64; 3],
    history: VecDeque<HistoryEntry>,
}

impl Default for MlDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl MlDemo {
    pub fn new() -> Self {
        Self {
            classifier: LogisticClassifier::default(),
            features: DEFAULT_FEATURES,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }

    pub fn classifier(&self) -> &LogisticClassifier {
        &self.classifier
    }

    pub fn features(&self) -> [f64; 3] {
        self.features
    }

    /// Live prediction for the current sliders.
    pub fn prediction(&self) -> Prediction {
        self.classifier.predict(&self.features)
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Move one slider; the value is clamped to `[0, 1]`.
    pub fn set_feature(&mut self, index: usize, value: f64) -> Result<(), ChatError> {
        let slot = self
            .features
            .get_mut(index)
            .ok_or(ChatError::UnknownFeature(index))?;
        *slot = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        Ok(())
    }

    pub fn randomize(&mut self, rng: &mut dyn RandomSource) {
        for slot in &mut self.features {
            *slot = rng.next_unit();
        }
    }

    /// Store the current prediction, evicting the oldest past the limit.
    pub fn record(&mut self) -> &HistoryEntry {
        self.history.push_front(HistoryEntry {
            features: self.features,
            prediction: self.prediction(),
            recorded_at: Utc::now(),
        });
        self.history.truncate(HISTORY_LIMIT);
        &self.history[0]
    }

    pub fn reset(&mut self) {
        self.features = DEFAULT_FEATURES;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_prediction() {
        // logit = 0.1 + 0.25 - 0.09 + 0.56 = 0.82
        let p = MlDemo::new().prediction();
        let expected = 1.0 / (1.0 + (-0.82f64).exp());
        assert!(close(p.probability, expected));
        assert_eq!(p.label, Label::Positive);
        assert!(close(p.confidence, (expected - 0.5) * 2.0));
    }

    #[test]
    fn test_negative_side_of_boundary() {
        // logit = 0.1 - 0.3 = -0.2
        let p = LogisticClassifier::default().predict(&[0.0, 1.0, 0.0]);
        assert!(p.probability < 0.5);
        assert_eq!(p.label, Label::Negative);
    }

    #[test]
    fn test_feature_importance_normalised() {
        let importance = LogisticClassifier::default().feature_importance();
        let total: f64 = importance.iter().map(|f| f.importance).sum();
        assert!(close(total, 1.0));
        assert!(close(importance[0].importance, 0.5 / 1.6));
        assert!(close(importance[1].importance, 0.3 / 1.6));
        assert_eq!(importance[2].feature, "Technology Stack");
    }

    #[test]
    fn test_set_feature_clamps_and_checks_index() {
        let mut demo = MlDemo::new();
        demo.set_feature(0, 1.7).unwrap();
        demo.set_feature(1, -2.0).unwrap();
        assert_eq!(demo.features(), [1.0, 0.0, 0.7]);
        assert!(matches!(
            demo.set_feature(3, 0.5),
            Err(ChatError::UnknownFeature(3))
        ));
    }

    #[test]
    fn test_history_keeps_last_five_newest_first() {
        let mut demo = MlDemo::new();
        for i in 0..7u8 {
            demo.set_feature(0, f64::from(i) / 10.0).unwrap();
            demo.record();
        }
        let firsts: Vec<f64> = demo.history().map(|h| h.features[0]).collect();
        assert_eq!(firsts.len(), HISTORY_LIMIT);
        assert!(close(firsts[0], 0.6));
        assert!(close(firsts[4], 0.2));
    }

    #[test]
    fn test_randomize_and_reset() {
        let mut demo = MlDemo::new();
        demo.randomize(&mut ScriptedRandom::new([0.1, 0.2, 0.3]));
        assert_eq!(demo.features(), [0.1, 0.2, 0.3]);
        demo.record();

        demo.reset();
        assert_eq!(demo.features(), DEFAULT_FEATURES);
        assert_eq!(demo.history().count(), 0);
    }
}
