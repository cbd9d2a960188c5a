//! Intent resolution.
//!
//! Turns one visitor utterance into exactly one reply, at most one overlay
//! request and an optional accent change, logging the interactions the
//! matched branch implies.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use folio_core::fixtures::Portfolio;
use folio_core::types::{section, InteractionKind};

use crate::overlays::Overlay;
use crate::parser::{AccentTheme, Intent, IntentParser};
use crate::random::RandomSource;
use crate::response::{self, ResponseGenerator, QUOTES};
use crate::session::SessionTracker;

/// An overlay the caller should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayRequest {
    pub overlay: Overlay,
    /// Raw utterance forwarded to the skill visualizer.
    pub query: Option<String>,
}

impl OverlayRequest {
    fn plain(overlay: Overlay) -> Self {
        Self {
            overlay,
            query: None,
        }
    }
}

/// Outcome of resolving one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Matched intent; `None` for the cold-start introduction.
    pub intent: Option<Intent>,
    pub reply: String,
    pub overlay: Option<OverlayRequest>,
    /// Advisory accent colour; callers may ignore it.
    pub accent: Option<AccentTheme>,
}

/// Stateful resolver for one session.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    parser: IntentParser,
    responses: ResponseGenerator,
    greeted: bool,
}

impl IntentResolver {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            parser: IntentParser::new(),
            responses: ResponseGenerator::new(portfolio),
            greeted: false,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        self.responses.portfolio()
    }

    /// Resolve a non-empty utterance. Total: every input yields a reply.
    ///
    /// The first call of a session ignores the text and introduces the
    /// companion. Every later call logs a `skill_query` before dispatch, so
    /// branches that log their own interaction produce two records.
    pub fn resolve(
        &mut self,
        input: &str,
        tracker: &mut SessionTracker,
        rng: &mut dyn RandomSource,
    ) -> Resolution {
        if !self.greeted {
            self.greeted = true;
            tracker.record_interaction(
                InteractionKind::FirstInteraction,
                json!({ "timestamp": Utc::now().to_rfc3339() }),
            );
            debug!(session_id = %tracker.session().id, "Cold start, sending introduction");
            return Resolution {
                intent: None,
                reply: response::INTRODUCTION.to_string(),
                overlay: None,
                accent: None,
            };
        }

        tracker.record_skill_query(input);

        let accent = self.parser.accent(input);
        let intent = self.parser.classify(input);
        debug!(session_id = %tracker.session().id, intent = ?intent, accent = ?accent, "Resolved utterance");

        let (reply, overlay) = match intent {
            Intent::Inspiration => {
                tracker.record_interaction(
                    InteractionKind::EasterEgg,
                    json!({ "trigger": "inspire_me" }),
                );
                let quote = QUOTES[rng.pick_index(QUOTES.len())];
                (quote.to_string(), None)
            }
            Intent::SkillVisualizer => (
                response::SKILL_VISUALIZER_OPENED.to_string(),
                Some(OverlayRequest {
                    overlay: Overlay::SkillVisualizer,
                    query: Some(input.to_string()),
                }),
            ),
            Intent::ResumeGenerator => (
                response::RESUME_GENERATOR_OPENED.to_string(),
                Some(OverlayRequest::plain(Overlay::ResumeGenerator)),
            ),
            Intent::AiDemo => (
                response::AI_DEMO_OPENED.to_string(),
                Some(OverlayRequest::plain(Overlay::AiDemo)),
            ),
            Intent::MlDemo => (
                response::ML_DEMO_OPENED.to_string(),
                Some(OverlayRequest::plain(Overlay::MlDemo)),
            ),
            Intent::Quiz => {
                tracker.record_interaction(
                    InteractionKind::FeatureAccess,
                    json!({ "feature": "ai_quiz" }),
                );
                (
                    response::QUIZ_OPENED.to_string(),
                    Some(OverlayRequest::plain(Overlay::Quiz)),
                )
            }
            Intent::CareerPredictor => {
                tracker.record_interaction(
                    InteractionKind::FeatureAccess,
                    json!({ "feature": "career_predictor" }),
                );
                (
                    response::CAREER_PREDICTOR_OPENED.to_string(),
                    Some(OverlayRequest::plain(Overlay::CareerPredictor)),
                )
            }
            Intent::Projects(topic) => {
                tracker.record_section_visit(section::PROJECTS);
                (self.responses.project(topic), None)
            }
            Intent::Skills(topic) => (self.responses.skills(topic), None),
            Intent::Achievements => {
                tracker.record_section_visit(section::ACHIEVEMENTS);
                (self.responses.achievements(), None)
            }
            Intent::Certifications => {
                tracker.record_section_visit(section::CERTIFICATIONS);
                (self.responses.certifications(), None)
            }
            Intent::About => (self.responses.about(), None),
            Intent::Contact => (self.responses.contact(), None),
            Intent::Fallback => {
                let suggestion = tracker.next_suggestion();
                (
                    self.responses.fallback(tracker.session(), &suggestion),
                    None,
                )
            }
        };

        Resolution {
            intent: Some(intent),
            reply,
            overlay,
            accent,
        }
    }
}
