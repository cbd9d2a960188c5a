//! The portfolio chat companion.
//!
//! Keyword intent resolution, visitor session tracking with adaptive
//! suggestions, and the widget controller that wraps both with reply
//! latency, ambient popups and overlay panels.

pub mod error;
pub mod overlays;
pub mod parser;
pub mod random;
pub mod resolver;
pub mod response;
pub mod session;
pub mod timer;
pub mod widget;

pub use error::ChatError;
pub use overlays::Overlay;
pub use parser::{AccentTheme, Intent, IntentParser, ProjectTopic, SkillTopic};
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use resolver::{IntentResolver, OverlayRequest, Resolution};
pub use response::ResponseGenerator;
pub use session::{
    RelatedProject, Session, SessionTracker, Suggestion, SuggestionAction, SuggestionKind,
};
pub use timer::{TimerId, TimerQueue};
pub use widget::{CompanionEvent, CompanionWidget, UiState, QUICK_QUESTIONS};
