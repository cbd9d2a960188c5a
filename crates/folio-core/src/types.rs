use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Interactions
// =============================================================================

/// What a visitor did. Unknown kinds are carried through as `Other` so a
/// newer front end can log events this core does not understand yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InteractionKind {
    FirstInteraction,
    ProjectClick,
    SkillQuery,
    SectionVisit,
    ResumeGenerate,
    DemoUse,
    EasterEgg,
    FeatureAccess,
    Other(String),
}

impl InteractionKind {
    pub fn as_str(&self) -> &str {
        match self {
            InteractionKind::FirstInteraction => "first_interaction",
            InteractionKind::ProjectClick => "project_click",
            InteractionKind::SkillQuery => "skill_query",
            InteractionKind::SectionVisit => "section_visit",
            InteractionKind::ResumeGenerate => "resume_generate",
            InteractionKind::DemoUse => "demo_use",
            InteractionKind::EasterEgg => "easter_egg",
            InteractionKind::FeatureAccess => "feature_access",
            InteractionKind::Other(name) => name,
        }
    }
}

impl From<&str> for InteractionKind {
    fn from(value: &str) -> Self {
        match value {
            "first_interaction" => InteractionKind::FirstInteraction,
            "project_click" => InteractionKind::ProjectClick,
            "skill_query" => InteractionKind::SkillQuery,
            "section_visit" => InteractionKind::SectionVisit,
            "resume_generate" => InteractionKind::ResumeGenerate,
            "demo_use" => InteractionKind::DemoUse,
            "easter_egg" => InteractionKind::EasterEgg,
            "feature_access" => InteractionKind::FeatureAccess,
            other => InteractionKind::Other(other.to_string()),
        }
    }
}

impl From<String> for InteractionKind {
    fn from(value: String) -> Self {
        InteractionKind::from(value.as_str())
    }
}

impl From<InteractionKind> for String {
    fn from(kind: InteractionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded visitor interaction. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Opaque key-value data; a few kinds read well-known keys from it.
    pub payload: serde_json::Value,
    pub occurred_at: DateTime<Utc>,
}

/// Section identifiers, matching the element ids a host page scrolls to.
pub mod section {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const CERTIFICATIONS: &str = "certifications";
}

// =============================================================================
// Chat messages
// =============================================================================

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Bot,
    User,
}

/// A single entry of the chat log. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}
