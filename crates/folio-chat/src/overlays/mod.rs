//! Feature panels the companion can open over the page.
//!
//! Each panel is a plain model: the controller decides which one is
//! visible, the host renders it.

pub mod ai_demo;
pub mod career;
pub mod ml_demo;
pub mod quiz;
pub mod resume;
pub mod skills;

use std::fmt;

use serde::Serialize;

pub use ai_demo::{
    analyze_sentiment, classify_genre, Emotions, GenrePrediction, Sentiment, SentimentAnalysis,
    GENRES,
};
pub use career::{CareerProjection, ProbabilityTier, PROJECTIONS};
pub use ml_demo::{
    FeatureImportance, HistoryEntry, Label, LogisticClassifier, MlDemo, Prediction,
    FEATURE_NAMES,
};
pub use quiz::{AnswerOutcome, Difficulty, QuizQuestion, QuizSession, QUESTIONS};
pub use resume::{tailor, Resume, ResumeRole};
pub use skills::{proficiency, SkillLevel, SkillView};

/// One of the six overlay panels. At most one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    SkillVisualizer,
    ResumeGenerator,
    MlDemo,
    AiDemo,
    Quiz,
    CareerPredictor,
}

impl Overlay {
    pub const ALL: [Overlay; 6] = [
        Overlay::SkillVisualizer,
        Overlay::ResumeGenerator,
        Overlay::MlDemo,
        Overlay::AiDemo,
        Overlay::Quiz,
        Overlay::CareerPredictor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::SkillVisualizer => "skill_visualizer",
            Overlay::ResumeGenerator => "resume_generator",
            Overlay::MlDemo => "ml_demo",
            Overlay::AiDemo => "ai_demo",
            Overlay::Quiz => "quiz",
            Overlay::CareerPredictor => "career_predictor",
        }
    }

    /// Parse the snake_case name, also accepting a few short aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "skill_visualizer" | "skills" => Some(Overlay::SkillVisualizer),
            "resume_generator" | "resume" => Some(Overlay::ResumeGenerator),
            "ml_demo" | "ml" => Some(Overlay::MlDemo),
            "ai_demo" | "try_ai" | "ai" => Some(Overlay::AiDemo),
            "quiz" => Some(Overlay::Quiz),
            "career_predictor" | "career" => Some(Overlay::CareerPredictor),
            _ => None,
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_names_roundtrip() {
        for overlay in Overlay::ALL {
            assert_eq!(Overlay::from_name(overlay.as_str()), Some(overlay));
        }
    }

    #[test]
    fn test_overlay_aliases() {
        assert_eq!(Overlay::from_name("Skills"), Some(Overlay::SkillVisualizer));
        assert_eq!(Overlay::from_name(" try_ai "), Some(Overlay::AiDemo));
        assert_eq!(Overlay::from_name("nope"), None);
    }

    #[test]
    fn test_overlay_serializes_snake_case() {
        let json = serde_json::to_string(&Overlay::CareerPredictor).unwrap();
        assert_eq!(json, "\"career_predictor\"");
    }
}
