//! Keyword intent parser.
//!
//! Classifies a visitor's utterance by substring containment of lower-cased
//! keywords, testing rule groups in a fixed priority order. The first group
//! that matches wins, even where later groups would also match.

use serde::Serialize;

// =============================================================================
// Intents
// =============================================================================

/// A specific project the visitor asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTopic {
    Diabetes,
    MusicGenre,
    Ecommerce,
    Weather,
}

/// A specific skill the visitor asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTopic {
    Python,
    Java,
    MachineLearning,
}

/// Classified meaning of one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Inspiration,
    SkillVisualizer,
    ResumeGenerator,
    AiDemo,
    MlDemo,
    Quiz,
    CareerPredictor,
    Projects(Option<ProjectTopic>),
    Skills(Option<SkillTopic>),
    Achievements,
    Certifications,
    About,
    Contact,
    Fallback,
}

/// Cosmetic accent colour requested by an utterance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentTheme {
    #[default]
    Cool,
    Ai,
    Data,
    Projects,
}

// =============================================================================
// Keyword tables
// =============================================================================

static INSPIRATION_PHRASE: &str = "inspire me";

static SKILL_VISUALIZER_QUALIFIERS: &[&str] = &["skill", "vs", "compare"];
static RESUME_KEYWORDS: &[&str] = &["resume", "cv", "generate"];
static AI_DEMO_KEYWORDS: &[&str] = &["demo", "try my ai", "audio", "sentiment", "genre"];
static ML_DEMO_KEYWORDS: &[&str] = &["ml demo", "classifier", "machine learning"];
static QUIZ_KEYWORDS: &[&str] = &["quiz", "challenge", "test"];
static CAREER_KEYWORDS: &[&str] = &["career", "future", "predict", "growth"];
static PROJECT_KEYWORDS: &[&str] = &["project", "work", "portfolio", "what has he built"];
static SKILL_KEYWORDS: &[&str] = &[
    "skill",
    "python",
    "java",
    "machine learning",
    "what can he do",
    "technologies",
];
static ACHIEVEMENT_KEYWORDS: &[&str] = &["achievement", "award", "competition"];
static CERTIFICATION_KEYWORDS: &[&str] = &["certification", "certificate"];
static ABOUT_KEYWORDS: &[&str] = &["about", "who"];
static CONTACT_KEYWORDS: &[&str] = &["contact", "reach"];

static AI_ACCENT_KEYWORDS: &[&str] = &["ai", "ml", "machine"];
static DATA_ACCENT_KEYWORDS: &[&str] = &["data", "analysis"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// =============================================================================
// IntentParser
// =============================================================================

/// Rule-based intent classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentParser;

impl IntentParser {
    pub fn new() -> Self {
        Self
    }

    /// Classify a raw utterance. Greetings have no intent of their own; the
    /// cold-start rule depends on session state and lives in the resolver.
    ///
    /// Note: `"machine learning"` is claimed by the ML demo group before the
    /// skills group can see it, and `"genre"` by the AI demo group before the
    /// project group. The order is kept as observed.
    pub fn classify(&self, raw: &str) -> Intent {
        let q = raw.to_lowercase();

        if q.contains(INSPIRATION_PHRASE) {
            return Intent::Inspiration;
        }
        if q.contains("show") && contains_any(&q, SKILL_VISUALIZER_QUALIFIERS) {
            return Intent::SkillVisualizer;
        }
        if contains_any(&q, RESUME_KEYWORDS) {
            return Intent::ResumeGenerator;
        }
        if contains_any(&q, AI_DEMO_KEYWORDS) {
            return Intent::AiDemo;
        }
        if contains_any(&q, ML_DEMO_KEYWORDS) {
            return Intent::MlDemo;
        }
        if contains_any(&q, QUIZ_KEYWORDS) {
            return Intent::Quiz;
        }
        if contains_any(&q, CAREER_KEYWORDS)
            || (q.contains("where") && q.contains("skills") && q.contains("lead"))
        {
            return Intent::CareerPredictor;
        }
        if contains_any(&q, PROJECT_KEYWORDS) {
            return Intent::Projects(project_topic(&q));
        }
        if contains_any(&q, SKILL_KEYWORDS) {
            return Intent::Skills(skill_topic(&q));
        }
        if contains_any(&q, ACHIEVEMENT_KEYWORDS) {
            return Intent::Achievements;
        }
        if contains_any(&q, CERTIFICATION_KEYWORDS) {
            return Intent::Certifications;
        }
        if contains_any(&q, ABOUT_KEYWORDS) {
            return Intent::About;
        }
        if contains_any(&q, CONTACT_KEYWORDS) {
            return Intent::Contact;
        }
        Intent::Fallback
    }

    /// Accent colour hinted at by the utterance, first match wins.
    pub fn accent(&self, raw: &str) -> Option<AccentTheme> {
        let q = raw.to_lowercase();
        if contains_any(&q, AI_ACCENT_KEYWORDS) {
            Some(AccentTheme::Ai)
        } else if contains_any(&q, DATA_ACCENT_KEYWORDS) {
            Some(AccentTheme::Data)
        } else if q.contains("project") {
            Some(AccentTheme::Projects)
        } else {
            None
        }
    }
}

fn project_topic(q: &str) -> Option<ProjectTopic> {
    if q.contains("diabetes") {
        Some(ProjectTopic::Diabetes)
    } else if q.contains("music") || q.contains("genre") {
        Some(ProjectTopic::MusicGenre)
    } else if q.contains("ecommerce") || q.contains("e-commerce") {
        Some(ProjectTopic::Ecommerce)
    } else if q.contains("weather") {
        Some(ProjectTopic::Weather)
    } else {
        None
    }
}

fn skill_topic(q: &str) -> Option<SkillTopic> {
    if q.contains("python") {
        Some(SkillTopic::Python)
    } else if q.contains("java") {
        Some(SkillTopic::Java)
    } else if q.contains("machine learning") || q.contains("ai") {
        Some(SkillTopic::MachineLearning)
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
