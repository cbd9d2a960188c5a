//! Companion widget controller.
//!
//! Owns everything the floating chat widget shows: the message log, the UI
//! flags, the visitor session and the pending timers. Inputs arrive through
//! transition methods; timed behaviour (reply latency, the ambient tick,
//! popup dismissal) only happens when the owner calls [`CompanionWidget::advance`].

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use folio_core::config::CompanionConfig;
use folio_core::fixtures::Portfolio;
use folio_core::types::{ChatMessage, InteractionKind};

use crate::error::ChatError;
use crate::overlays::{
    analyze_sentiment, classify_genre, tailor, AnswerOutcome, GenrePrediction, HistoryEntry, MlDemo,
    Overlay, QuizSession, Resume, ResumeRole, SentimentAnalysis, SkillView,
};
use crate::parser::AccentTheme;
use crate::random::{RandomSource, RngSource};
use crate::resolver::{IntentResolver, Resolution};
use crate::response::{Fact, AI_FACTS, WELCOME_ON_OPEN};
use crate::session::{RelatedProject, Session, SessionTracker, Suggestion};
use crate::timer::{TimerId, TimerQueue};

/// Prompts offered as one-tap buttons under the input.
pub const QUICK_QUESTIONS: [&str; 8] = [
    "Tell me about his projects",
    "Show me Python vs Java skills",
    "Generate a resume",
    "Try my AI demos",
    "Challenge me with a quiz",
    "Show career predictions",
    "What are his achievements?",
    "Inspire me",
];

// =============================================================================
// State and events
// =============================================================================

/// Everything the host needs to render the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub open: bool,
    /// A reply is pending.
    pub typing: bool,
    pub overlay: Option<Overlay>,
    /// Query the skill visualizer was opened with.
    pub skill_query: Option<String>,
    pub accent: AccentTheme,
    /// Index into [`AI_FACTS`] of the visible fact popup.
    pub fact: Option<usize>,
    pub skills_cloud: bool,
    pub disposed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CompanionTimer {
    Welcome,
    Reply { utterance: String },
    AmbientTick,
    DismissFact,
    DismissSkillsCloud,
}

/// Something that happened while time advanced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CompanionEvent {
    Welcomed,
    Replied { resolution: Resolution },
    OverlayOpened { overlay: Overlay },
    OverlayClosed { overlay: Overlay },
    FactShown { index: usize },
    FactDismissed,
    SkillsCloudShown,
    SkillsCloudDismissed,
    SuggestionInjected { suggestion: Suggestion },
}

// =============================================================================
// CompanionWidget
// =============================================================================

pub struct CompanionWidget<R: RandomSource = RngSource<StdRng>> {
    config: CompanionConfig,
    portfolio: Arc<Portfolio>,
    resolver: IntentResolver,
    tracker: SessionTracker,
    messages: Vec<ChatMessage>,
    ui: UiState,
    timers: TimerQueue<CompanionTimer>,
    welcome: Option<TimerId>,
    quiz: QuizSession,
    ml_demo: MlDemo,
    rng: R,
}

impl<R: RandomSource> CompanionWidget<R> {
    pub fn new(config: CompanionConfig, portfolio: Arc<Portfolio>, rng: R) -> Self {
        Self {
            config,
            resolver: IntentResolver::new(Arc::clone(&portfolio)),
            portfolio,
            tracker: SessionTracker::new(),
            messages: Vec::new(),
            ui: UiState::default(),
            timers: TimerQueue::new(),
            welcome: None,
            quiz: QuizSession::new(),
            ml_demo: MlDemo::new(),
            rng,
        }
    }

    // ---- Accessors ----

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn session(&self) -> &Session {
        self.tracker.session()
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn next_suggestion(&self) -> Suggestion {
        self.tracker.next_suggestion()
    }

    pub fn current_fact(&self) -> Option<&'static Fact> {
        self.ui.fact.and_then(|i| AI_FACTS.get(i))
    }

    /// View for the skill visualizer, when it is the open overlay.
    pub fn skill_view(&self) -> Option<SkillView> {
        if self.ui.overlay != Some(Overlay::SkillVisualizer) {
            return None;
        }
        let query = self.ui.skill_query.as_deref().unwrap_or_default();
        Some(SkillView::from_query(query, &self.portfolio))
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn ml_demo(&self) -> &MlDemo {
        &self.ml_demo
    }

    /// Time until the next timer fires, if any is pending.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    fn ensure_live(&self) -> Result<(), ChatError> {
        if self.ui.disposed {
            Err(ChatError::WidgetDisposed)
        } else {
            Ok(())
        }
    }

    // ---- Open / close ----

    /// Show the chat window and start the ambient tick.
    pub fn open(&mut self) -> Result<(), ChatError> {
        self.ensure_live()?;
        if self.ui.open {
            return Ok(());
        }
        self.ui.open = true;
        self.timers
            .schedule(self.config.ambient_interval(), CompanionTimer::AmbientTick);
        if self.messages.is_empty() {
            self.welcome = Some(
                self.timers
                    .schedule(self.config.welcome_delay(), CompanionTimer::Welcome),
            );
        }
        info!(session_id = %self.session().id, "Companion opened");
        Ok(())
    }

    /// Hide the chat window. Ambient activity stops; an in-flight reply
    /// still lands in the log.
    pub fn close(&mut self) -> Result<(), ChatError> {
        self.ensure_live()?;
        if !self.ui.open {
            return Ok(());
        }
        self.ui.open = false;
        self.ui.fact = None;
        self.ui.skills_cloud = false;
        if let Some(id) = self.welcome.take() {
            self.timers.cancel(id);
        }
        let cancelled = self.timers.cancel_matching(|t| {
            matches!(
                t,
                CompanionTimer::AmbientTick
                    | CompanionTimer::DismissFact
                    | CompanionTimer::DismissSkillsCloud
            )
        });
        info!(session_id = %self.session().id, cancelled, "Companion closed");
        Ok(())
    }

    /// Flip open/closed; returns the new open state.
    pub fn toggle(&mut self) -> Result<bool, ChatError> {
        if self.ui.open {
            self.close()?;
        } else {
            self.open()?;
        }
        Ok(self.ui.open)
    }

    /// Dispose of the widget. Every pending timer is dropped and later
    /// input is rejected.
    pub fn teardown(&mut self) {
        if self.ui.disposed {
            return;
        }
        let pending = self.timers.len();
        self.timers.clear();
        self.welcome = None;
        self.ui.open = false;
        self.ui.typing = false;
        self.ui.fact = None;
        self.ui.skills_cloud = false;
        self.ui.disposed = true;
        info!(session_id = %self.session().id, pending, "Companion torn down");
    }

    // ---- Conversation ----

    /// Post a visitor message; the reply arrives after a randomised delay.
    pub fn submit(&mut self, text: &str) -> Result<TimerId, ChatError> {
        self.ensure_live()?;
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.messages.push(ChatMessage::user(text));
        let jitter = self.config.reply_jitter().mul_f64(self.rng.next_unit());
        let delay = self.config.reply_delay() + jitter;
        let id = self.timers.schedule(
            delay,
            CompanionTimer::Reply {
                utterance: text.to_string(),
            },
        );
        self.ui.typing = true;
        debug!(delay_ms = delay.as_millis() as u64, "Reply scheduled");
        Ok(id)
    }

    pub fn ask_quick_question(&mut self, index: usize) -> Result<TimerId, ChatError> {
        let question = QUICK_QUESTIONS
            .get(index)
            .ok_or(ChatError::UnknownQuickQuestion(index))?;
        self.submit(question)
    }

    // ---- Overlays ----

    /// Open an overlay directly, closing whichever one is showing.
    /// Returns the overlay that was replaced.
    pub fn open_overlay(&mut self, overlay: Overlay) -> Result<Option<Overlay>, ChatError> {
        self.ensure_live()?;
        let mut events = Vec::new();
        Ok(self.show_overlay(overlay, None, &mut events))
    }

    pub fn close_overlay(&mut self) -> Option<Overlay> {
        self.ui.skill_query = None;
        self.ui.overlay.take()
    }

    fn show_overlay(
        &mut self,
        overlay: Overlay,
        query: Option<String>,
        events: &mut Vec<CompanionEvent>,
    ) -> Option<Overlay> {
        let previous = self.ui.overlay.take();
        if let Some(prev) = previous {
            if prev != overlay {
                events.push(CompanionEvent::OverlayClosed { overlay: prev });
            }
        }
        self.ui.skill_query = match overlay {
            Overlay::SkillVisualizer => query,
            _ => None,
        };
        self.ui.overlay = Some(overlay);
        debug!(overlay = %overlay, "Overlay shown");
        events.push(CompanionEvent::OverlayOpened { overlay });
        previous
    }

    pub fn answer_quiz(&mut self, option: usize) -> Result<AnswerOutcome, ChatError> {
        self.ensure_live()?;
        self.quiz.answer(option)
    }

    pub fn reset_quiz(&mut self) {
        self.quiz.reset();
    }

    /// Build a resume for `role` and log the request.
    pub fn generate_resume(&mut self, role: ResumeRole) -> Result<Resume, ChatError> {
        self.ensure_live()?;
        self.tracker.record_interaction(
            InteractionKind::ResumeGenerate,
            json!({ "role": role.id() }),
        );
        Ok(tailor(role, &self.portfolio))
    }

    /// Run the sentiment demo on `text`.
    pub fn analyze_sentiment(&mut self, text: &str) -> Result<SentimentAnalysis, ChatError> {
        self.ensure_live()?;
        let analysis = analyze_sentiment(text, &mut self.rng)?;
        self.record_demo_use("sentiment_analysis");
        Ok(analysis)
    }

    /// Run the genre demo on an (unread) uploaded clip.
    pub fn classify_genre(&mut self) -> Result<GenrePrediction, ChatError> {
        self.ensure_live()?;
        let prediction = classify_genre(&mut self.rng);
        self.record_demo_use("genre_classification");
        Ok(prediction)
    }

    pub fn set_ml_feature(&mut self, index: usize, value: f64) -> Result<(), ChatError> {
        self.ensure_live()?;
        self.ml_demo.set_feature(index, value)
    }

    pub fn randomize_ml_features(&mut self) -> Result<(), ChatError> {
        self.ensure_live()?;
        self.ml_demo.randomize(&mut self.rng);
        Ok(())
    }

    /// Store the classifier's current prediction in its history.
    pub fn record_ml_prediction(&mut self) -> Result<HistoryEntry, ChatError> {
        self.ensure_live()?;
        let entry = self.ml_demo.record().clone();
        self.record_demo_use("ml_classifier");
        Ok(entry)
    }

    pub fn reset_ml_demo(&mut self) {
        self.ml_demo.reset();
    }

    fn record_demo_use(&mut self, demo: &str) {
        self.tracker
            .record_interaction(InteractionKind::DemoUse, json!({ "demo": demo }));
    }

    // ---- Host page hooks ----

    pub fn visit_section(&mut self, section: &str) -> Result<(), ChatError> {
        self.ensure_live()?;
        self.tracker.record_section_visit(section);
        Ok(())
    }

    /// Log a project click and return the projects most related to it.
    pub fn click_project(&mut self, project_id: &str) -> Result<Vec<RelatedProject>, ChatError> {
        self.ensure_live()?;
        self.tracker.record_project_click(project_id);
        Ok(SessionTracker::related_projects(
            project_id,
            &self.portfolio.projects,
        ))
    }

    // ---- Time ----

    /// Move virtual time forward, firing every timer that falls due in
    /// deadline order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<CompanionEvent> {
        let mut events = Vec::new();
        if self.ui.disposed {
            return events;
        }
        let until = self.timers.now() + elapsed;
        while let Some((_, timer)) = self.timers.pop_due(until) {
            self.fire(timer, &mut events);
        }
        self.timers.advance_clock_to(until);
        events
    }

    fn fire(&mut self, timer: CompanionTimer, events: &mut Vec<CompanionEvent>) {
        match timer {
            CompanionTimer::Welcome => {
                self.welcome = None;
                if self.messages.is_empty() {
                    self.messages.push(ChatMessage::bot(WELCOME_ON_OPEN));
                    events.push(CompanionEvent::Welcomed);
                }
            }
            CompanionTimer::Reply { utterance } => {
                let resolution =
                    self.resolver
                        .resolve(&utterance, &mut self.tracker, &mut self.rng);
                if let Some(request) = &resolution.overlay {
                    self.show_overlay(request.overlay, request.query.clone(), events);
                }
                if let Some(accent) = resolution.accent {
                    self.ui.accent = accent;
                }
                self.messages.push(ChatMessage::bot(resolution.reply.clone()));
                self.ui.typing = self
                    .timers
                    .any_pending(|t| matches!(t, CompanionTimer::Reply { .. }));
                events.push(CompanionEvent::Replied { resolution });
            }
            CompanionTimer::AmbientTick => self.ambient_tick(events),
            CompanionTimer::DismissFact => {
                self.ui.fact = None;
                events.push(CompanionEvent::FactDismissed);
            }
            CompanionTimer::DismissSkillsCloud => {
                self.ui.skills_cloud = false;
                events.push(CompanionEvent::SkillsCloudDismissed);
            }
        }
    }

    /// One draw decides between a fact popup, the skills cloud, an injected
    /// suggestion, or nothing.
    fn ambient_tick(&mut self, events: &mut Vec<CompanionEvent>) {
        if !self.ui.open {
            return;
        }
        self.timers
            .schedule(self.config.ambient_interval(), CompanionTimer::AmbientTick);

        let cfg = &self.config;
        let fact_cut = cfg.fact_probability;
        let cloud_cut = fact_cut + cfg.skills_cloud_probability;
        let suggestion_cut = cloud_cut + cfg.suggestion_probability;

        let r = self.rng.next_unit();
        if r < fact_cut {
            let index = self.rng.pick_index(AI_FACTS.len());
            self.ui.fact = Some(index);
            self.timers
                .cancel_matching(|t| *t == CompanionTimer::DismissFact);
            self.timers
                .schedule(self.config.fact_display(), CompanionTimer::DismissFact);
            events.push(CompanionEvent::FactShown { index });
        } else if r < cloud_cut {
            self.ui.skills_cloud = true;
            self.timers
                .cancel_matching(|t| *t == CompanionTimer::DismissSkillsCloud);
            self.timers.schedule(
                self.config.skills_cloud_display(),
                CompanionTimer::DismissSkillsCloud,
            );
            events.push(CompanionEvent::SkillsCloudShown);
        } else if r < suggestion_cut {
            let suggestion = self.tracker.next_suggestion();
            let repeat = self
                .messages
                .last()
                .is_some_and(|m| m.text == suggestion.text);
            if !repeat {
                self.messages.push(ChatMessage::bot(suggestion.text.clone()));
                events.push(CompanionEvent::SuggestionInjected { suggestion });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use folio_core::types::Speaker;

    fn widget(draws: &[f64]) -> CompanionWidget<ScriptedRandom> {
        CompanionWidget::new(
            CompanionConfig::default(),
            Arc::new(Portfolio::builtin()),
            ScriptedRandom::new(draws.iter().copied()),
        )
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_open_schedules_welcome_and_tick() {
        let mut w = widget(&[]);
        w.open().unwrap();
        assert!(w.ui().open);
        assert_eq!(w.next_due(), Some(ms(500)));

        let events = w.advance(ms(500));
        assert_eq!(events, vec![CompanionEvent::Welcomed]);
        assert_eq!(w.messages().len(), 1);
        assert_eq!(w.messages()[0].text, WELCOME_ON_OPEN);
        assert_eq!(w.next_due(), Some(ms(9500)));
    }

    #[test]
    fn test_reopen_does_not_repeat_welcome() {
        let mut w = widget(&[]);
        w.open().unwrap();
        w.advance(ms(500));
        w.close().unwrap();
        w.open().unwrap();
        w.advance(ms(1000));
        assert_eq!(w.messages().len(), 1);
    }

    #[test]
    fn test_close_before_welcome_cancels_it() {
        let mut w = widget(&[]);
        w.open().unwrap();
        w.close().unwrap();
        assert_eq!(w.next_due(), None);
        assert!(w.advance(ms(60_000)).is_empty());
        assert!(w.messages().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut w = widget(&[]);
        assert!(w.toggle().unwrap());
        assert!(!w.toggle().unwrap());
    }

    #[test]
    fn test_submit_rejects_blank() {
        let mut w = widget(&[]);
        assert!(matches!(w.submit("   \t"), Err(ChatError::EmptyMessage)));
        assert!(w.messages().is_empty());
        assert!(w.session().interactions().is_empty());
        assert!(!w.ui().typing);
    }

    #[test]
    fn test_reply_delay_uses_jitter_draw() {
        let mut w = widget(&[0.25]);
        w.submit("hello").unwrap();
        assert!(w.ui().typing);
        assert_eq!(w.next_due(), Some(ms(1250)));

        assert!(w.advance(ms(1249)).is_empty());
        let events = w.advance(ms(1));
        assert_eq!(events.len(), 1);
        assert!(!w.ui().typing);

        let speakers: Vec<_> = w.messages().iter().map(|m| m.speaker).collect();
        assert_eq!(speakers, vec![Speaker::User, Speaker::Bot]);
    }

    #[test]
    fn test_typing_stays_while_another_reply_pending() {
        let mut w = widget(&[0.0, 0.9]);
        w.submit("one").unwrap();
        w.submit("two").unwrap();
        w.advance(ms(1000));
        assert!(w.ui().typing);
        w.advance(ms(900));
        assert!(!w.ui().typing);
    }

    #[test]
    fn test_unknown_quick_question() {
        let mut w = widget(&[]);
        assert!(matches!(
            w.ask_quick_question(QUICK_QUESTIONS.len()),
            Err(ChatError::UnknownQuickQuestion(8))
        ));
        w.ask_quick_question(7).unwrap();
        assert_eq!(w.messages()[0].text, "Inspire me");
    }

    #[test]
    fn test_open_overlay_replaces_previous() {
        let mut w = widget(&[]);
        assert_eq!(w.open_overlay(Overlay::Quiz).unwrap(), None);
        assert_eq!(
            w.open_overlay(Overlay::AiDemo).unwrap(),
            Some(Overlay::Quiz)
        );
        assert_eq!(w.ui().overlay, Some(Overlay::AiDemo));
        assert_eq!(w.close_overlay(), Some(Overlay::AiDemo));
        assert_eq!(w.ui().overlay, None);
    }

    #[test]
    fn test_skill_view_follows_overlay() {
        let mut w = widget(&[0.0, 0.0]);
        assert!(w.skill_view().is_none());
        w.submit("hi").unwrap();
        w.submit("Show me Python vs Java skills").unwrap();
        w.advance(ms(2000));
        assert!(matches!(w.skill_view(), Some(SkillView::Comparison { .. })));
        assert_eq!(
            w.ui().skill_query.as_deref(),
            Some("Show me Python vs Java skills")
        );
    }

    #[test]
    fn test_teardown_rejects_input() {
        let mut w = widget(&[]);
        w.open().unwrap();
        w.teardown();
        assert!(w.ui().disposed);
        assert!(!w.ui().open);
        assert!(matches!(w.open(), Err(ChatError::WidgetDisposed)));
        assert!(matches!(w.submit("hi"), Err(ChatError::WidgetDisposed)));
        assert!(matches!(w.visit_section("about"), Err(ChatError::WidgetDisposed)));
        assert!(matches!(w.click_project("1"), Err(ChatError::WidgetDisposed)));
        assert_eq!(w.next_due(), None);
    }

    #[test]
    fn test_click_project_returns_related() {
        let mut w = widget(&[]);
        let related = w.click_project("2").unwrap();
        let ids: Vec<_> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(w.session().clicked_project_ids(), ["2".to_string()]);
    }

    #[test]
    fn test_generate_resume_logs_interaction() {
        let mut w = widget(&[]);
        let resume = w.generate_resume(ResumeRole::DataAnalyst).unwrap();
        assert_eq!(resume.title, "Data Analyst");
        let last = w.session().interactions().last().unwrap();
        assert_eq!(last.kind, InteractionKind::ResumeGenerate);
        assert_eq!(last.payload["role"], "data-analyst");
    }

    #[test]
    fn test_quiz_through_widget() {
        let mut w = widget(&[]);
        assert!(w.answer_quiz(1).unwrap().correct);
        w.reset_quiz();
        assert_eq!(w.quiz().score(), 0);
    }

    fn demo_payloads<R: RandomSource>(w: &CompanionWidget<R>) -> Vec<String> {
        w.session()
            .interactions()
            .iter()
            .filter(|i| i.kind == InteractionKind::DemoUse)
            .map(|i| i.payload["demo"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_ai_demos_log_demo_use() {
        use crate::overlays::Sentiment;

        let mut w = widget(&[0.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5]);
        let analysis = w.analyze_sentiment("I love this, it is amazing").unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert!(analysis.emotions.surprise >= 0.5);

        let genre = w.classify_genre().unwrap();
        assert_eq!(genre.genre, "Rock");

        assert!(matches!(w.analyze_sentiment(""), Err(ChatError::EmptyMessage)));
        assert_eq!(
            demo_payloads(&w),
            vec!["sentiment_analysis", "genre_classification"]
        );
    }

    #[test]
    fn test_ml_demo_through_widget() {
        let mut w = widget(&[0.2, 0.4, 0.6]);
        w.randomize_ml_features().unwrap();
        assert_eq!(w.ml_demo().features(), [0.2, 0.4, 0.6]);
        w.set_ml_feature(2, 0.9).unwrap();
        assert!(w.set_ml_feature(5, 0.9).is_err());

        let entry = w.record_ml_prediction().unwrap();
        assert_eq!(entry.features, [0.2, 0.4, 0.9]);
        assert_eq!(entry.prediction, w.ml_demo().prediction());
        assert_eq!(demo_payloads(&w), vec!["ml_classifier"]);

        w.reset_ml_demo();
        assert_eq!(w.ml_demo().history().count(), 0);
        w.teardown();
        assert!(matches!(
            w.record_ml_prediction(),
            Err(ChatError::WidgetDisposed)
        ));
    }
}
