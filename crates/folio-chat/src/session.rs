//! Visitor session tracking.
//!
//! Keeps the append-only interaction log for one page load, the progress
//! views derived from it, and the suggestion rules that read those views.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use folio_core::fixtures::Project;
use folio_core::types::{section, Interaction, InteractionKind};

// =============================================================================
// Session
// =============================================================================

/// Interaction history and derived progress for one page load.
///
/// `visited_sections` only grows, `clicked_project_ids` and `skill_queries`
/// are append-only. The only way back to the initial state is a new session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    interactions: Vec<Interaction>,
    visited_sections: BTreeSet<String>,
    clicked_project_ids: Vec<String>,
    skill_queries: Vec<String>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            interactions: Vec::new(),
            visited_sections: BTreeSet::from([section::HERO.to_string()]),
            clicked_project_ids: Vec::new(),
            skill_queries: Vec::new(),
        }
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn visited_sections(&self) -> &BTreeSet<String> {
        &self.visited_sections
    }

    pub fn has_visited(&self, section: &str) -> bool {
        self.visited_sections.contains(section)
    }

    pub fn clicked_project_ids(&self) -> &[String] {
        &self.clicked_project_ids
    }

    pub fn skill_queries(&self) -> &[String] {
        &self.skill_queries
    }
}

// =============================================================================
// Suggestions
// =============================================================================

/// Which progress rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    VisitAchievements,
    VisitCertifications,
    VisitAbout,
    VisitProjects,
    NameProject,
    CompareSkills,
    TryInteractive,
    InspireMe,
}

/// What selecting a suggestion does in the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuggestionAction {
    None,
    /// Scroll to the element with this id.
    ScrollTo(&'static str),
}

impl SuggestionAction {
    pub fn target(&self) -> Option<&'static str> {
        match self {
            SuggestionAction::None => None,
            SuggestionAction::ScrollTo(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
    pub action: SuggestionAction,
}

impl Suggestion {
    fn new(kind: SuggestionKind, action: SuggestionAction) -> Self {
        let text = match kind {
            SuggestionKind::VisitAchievements => "💡 Since you explored my projects, you might want to check out my achievements next!",
            SuggestionKind::VisitCertifications => "🎓 Great! Now let me show you my certifications to see the formal validations.",
            SuggestionKind::VisitAbout => "💡 Curious about Srinivas's background? Check out the About section to learn more!",
            SuggestionKind::VisitProjects => "🚀 Ready to see some amazing projects? Let's explore the Projects section!",
            SuggestionKind::NameProject => "🎯 Try asking about specific projects like 'diabetes prediction' or 'music genre classification'!",
            SuggestionKind::CompareSkills => "📊 Try asking me 'Show me Python vs Java skills' to see the interactive skill visualizer!",
            SuggestionKind::TryInteractive => "🎮 Ready for something interactive? Try saying 'Challenge me with a quiz' or 'Show career predictions'!",
            SuggestionKind::InspireMe => "🌟 Ask me to 'inspire me' for some ancient wisdom with modern AI context!",
        };
        Self {
            kind,
            text: text.to_string(),
            action,
        }
    }
}

// =============================================================================
// Related projects
// =============================================================================

/// A project sharing technologies with the one being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedProject {
    pub id: String,
    pub title: String,
    pub shared_technologies: usize,
}

/// At most this many related projects are returned.
const MAX_RELATED: usize = 2;

// =============================================================================
// SessionTracker
// =============================================================================

/// Sole owner and mutator of a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionTracker {
    session: Session,
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTracker {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Append an interaction stamped with the current time.
    ///
    /// `project_click`, `skill_query` and `section_visit` also update the
    /// derived views from the `projectId`, `query` and `section` payload keys.
    /// Every other kind, including unknown ones, is only logged.
    pub fn record_interaction(&mut self, kind: InteractionKind, payload: Value) {
        debug!(session_id = %self.session.id, kind = %kind, "Recording interaction");

        match &kind {
            InteractionKind::ProjectClick => match payload_str(&payload, "projectId") {
                Some(id) => self.session.clicked_project_ids.push(id.to_string()),
                None => warn!(kind = %kind, "Interaction payload missing projectId"),
            },
            InteractionKind::SkillQuery => match payload_str(&payload, "query") {
                Some(q) => self.session.skill_queries.push(q.to_string()),
                None => warn!(kind = %kind, "Interaction payload missing query"),
            },
            InteractionKind::SectionVisit => match payload_str(&payload, "section") {
                Some(s) => {
                    self.session.visited_sections.insert(s.to_string());
                }
                None => warn!(kind = %kind, "Interaction payload missing section"),
            },
            InteractionKind::Other(name) => {
                warn!(kind = %name, "Unknown interaction kind recorded without derived effect");
            }
            _ => {}
        }

        self.session.interactions.push(Interaction {
            kind,
            payload,
            occurred_at: Utc::now(),
        });
    }

    pub fn record_section_visit(&mut self, section: &str) {
        self.record_interaction(
            InteractionKind::SectionVisit,
            serde_json::json!({ "section": section }),
        );
    }

    pub fn record_project_click(&mut self, project_id: &str) {
        self.record_interaction(
            InteractionKind::ProjectClick,
            serde_json::json!({ "projectId": project_id }),
        );
    }

    pub fn record_skill_query(&mut self, query: &str) {
        self.record_interaction(
            InteractionKind::SkillQuery,
            serde_json::json!({ "query": query }),
        );
    }

    /// Next step to propose, from the first progress rule that holds.
    ///
    /// Recomputed from the current session on every call.
    pub fn next_suggestion(&self) -> Suggestion {
        let s = &self.session;
        let projects = s.has_visited(section::PROJECTS);

        if projects && !s.has_visited(section::ACHIEVEMENTS) {
            return Suggestion::new(
                SuggestionKind::VisitAchievements,
                SuggestionAction::ScrollTo(section::ACHIEVEMENTS),
            );
        }
        if s.has_visited(section::ACHIEVEMENTS) && !s.has_visited(section::CERTIFICATIONS) {
            return Suggestion::new(
                SuggestionKind::VisitCertifications,
                SuggestionAction::ScrollTo(section::CERTIFICATIONS),
            );
        }
        if !s.has_visited(section::ABOUT) {
            return Suggestion::new(
                SuggestionKind::VisitAbout,
                SuggestionAction::ScrollTo(section::ABOUT),
            );
        }
        if !projects {
            return Suggestion::new(
                SuggestionKind::VisitProjects,
                SuggestionAction::ScrollTo(section::PROJECTS),
            );
        }
        if s.clicked_project_ids.is_empty() {
            return Suggestion::new(SuggestionKind::NameProject, SuggestionAction::None);
        }
        if s.skill_queries.is_empty() {
            return Suggestion::new(SuggestionKind::CompareSkills, SuggestionAction::None);
        }
        if !s.clicked_project_ids.is_empty() {
            return Suggestion::new(SuggestionKind::TryInteractive, SuggestionAction::None);
        }
        Suggestion::new(SuggestionKind::InspireMe, SuggestionAction::None)
    }

    /// Projects sharing at least one technology with `current_id`, most
    /// shared first, ties in list order, at most two.
    ///
    /// An unknown id yields an empty list.
    pub fn related_projects(current_id: &str, projects: &[Project]) -> Vec<RelatedProject> {
        let Some(current) = projects.iter().find(|p| p.id == current_id) else {
            return Vec::new();
        };
        let current_techs: HashSet<&str> =
            current.technologies.iter().map(String::as_str).collect();

        let mut related: Vec<RelatedProject> = projects
            .iter()
            .filter(|p| p.id != current_id)
            .filter_map(|p| {
                let own: HashSet<&str> = p.technologies.iter().map(String::as_str).collect();
                let shared = own.intersection(&current_techs).count();
                (shared > 0).then(|| RelatedProject {
                    id: p.id.clone(),
                    title: p.title.clone(),
                    shared_technologies: shared,
                })
            })
            .collect();

        // Stable sort keeps list order for equal counts.
        related.sort_by(|a, b| b.shared_technologies.cmp(&a.shared_technologies));
        related.truncate(MAX_RELATED);
        related
    }
}

fn payload_str<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::fixtures::{Portfolio, ProjectStatus};
    use serde_json::json;

    fn project(id: &str, techs: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            status: ProjectStatus::Completed,
            featured: true,
            github_url: String::new(),
            live_url: None,
        }
    }

    fn tracker_with(sections: &[&str]) -> SessionTracker {
        let mut t = SessionTracker::new();
        for s in sections {
            t.record_section_visit(s);
        }
        t
    }

    // ---- Derived views ----

    #[test]
    fn test_new_session_starts_at_hero() {
        let t = SessionTracker::new();
        let s = t.session();
        assert_eq!(s.visited_sections().len(), 1);
        assert!(s.has_visited("hero"));
        assert!(s.interactions().is_empty());
        assert!(s.clicked_project_ids().is_empty());
        assert!(s.skill_queries().is_empty());
    }

    #[test]
    fn test_section_visits_are_an_idempotent_union() {
        let t = tracker_with(&["about", "projects", "about", "hero", "projects", "contact"]);
        let sections: Vec<&str> = t
            .session()
            .visited_sections()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(sections, vec!["about", "contact", "hero", "projects"]);
        // Every call is still logged
        assert_eq!(t.session().interactions().len(), 6);
    }

    #[test]
    fn test_project_clicks_append_without_dedup() {
        let mut t = SessionTracker::new();
        for id in ["1", "2", "1", "1"] {
            t.record_project_click(id);
        }
        assert_eq!(t.session().clicked_project_ids(), &["1", "2", "1", "1"]);
    }

    #[test]
    fn test_skill_queries_keep_raw_text() {
        let mut t = SessionTracker::new();
        t.record_skill_query("Show me PYTHON");
        assert_eq!(t.session().skill_queries(), &["Show me PYTHON"]);
    }

    #[test]
    fn test_other_kinds_have_no_derived_effect() {
        let mut t = SessionTracker::new();
        t.record_interaction(InteractionKind::EasterEgg, json!({ "trigger": "inspire_me" }));
        t.record_interaction(
            InteractionKind::Other("hover_badge".to_string()),
            json!({ "section": "projects", "projectId": "1" }),
        );
        let s = t.session();
        assert_eq!(s.interactions().len(), 2);
        assert_eq!(s.visited_sections().len(), 1);
        assert!(s.clicked_project_ids().is_empty());
        assert_eq!(
            s.interactions()[1].kind,
            InteractionKind::Other("hover_badge".to_string())
        );
    }

    #[test]
    fn test_malformed_payload_is_logged_only() {
        let mut t = SessionTracker::new();
        t.record_interaction(InteractionKind::SectionVisit, json!({ "sec": "about" }));
        t.record_interaction(InteractionKind::ProjectClick, json!({ "projectId": 7 }));
        assert_eq!(t.session().interactions().len(), 2);
        assert!(!t.session().has_visited("about"));
        assert!(t.session().clicked_project_ids().is_empty());
    }

    #[test]
    fn test_interactions_keep_insertion_order() {
        let mut t = SessionTracker::new();
        t.record_skill_query("a");
        t.record_section_visit("about");
        t.record_project_click("2");
        let kinds: Vec<_> = t.session().interactions().iter().map(|i| i.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                InteractionKind::SkillQuery,
                InteractionKind::SectionVisit,
                InteractionKind::ProjectClick
            ]
        );
        let times: Vec<_> = t.session().interactions().iter().map(|i| i.occurred_at).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    // ---- Suggestions ----

    #[test]
    fn test_fresh_session_suggests_about() {
        let s = SessionTracker::new().next_suggestion();
        assert_eq!(s.kind, SuggestionKind::VisitAbout);
        assert_eq!(s.action.target(), Some("about"));
    }

    #[test]
    fn test_projects_without_achievements_suggests_achievements() {
        let s = tracker_with(&["projects"]).next_suggestion();
        assert_eq!(s.kind, SuggestionKind::VisitAchievements);
        assert_eq!(s.action, SuggestionAction::ScrollTo("achievements"));
    }

    #[test]
    fn test_achievements_without_certifications() {
        let s = tracker_with(&["projects", "achievements"]).next_suggestion();
        assert_eq!(s.kind, SuggestionKind::VisitCertifications);
        assert_eq!(s.action.target(), Some("certifications"));
    }

    #[test]
    fn test_about_without_projects_suggests_projects() {
        let s = tracker_with(&["about"]).next_suggestion();
        assert_eq!(s.kind, SuggestionKind::VisitProjects);
        assert_eq!(s.action.target(), Some("projects"));
    }

    #[test]
    fn test_about_and_projects_without_clicks_suggests_naming_a_project() {
        // Achievements and certifications visited so the earlier rules pass
        let t = tracker_with(&["about", "projects", "achievements", "certifications"]);
        let s = t.next_suggestion();
        assert_eq!(s.kind, SuggestionKind::NameProject);
        assert_eq!(s.action, SuggestionAction::None);
    }

    #[test]
    fn test_hero_about_projects_only_hits_achievements_rule_first() {
        let t = tracker_with(&["about", "projects"]);
        assert_eq!(t.next_suggestion().kind, SuggestionKind::VisitAchievements);
    }

    #[test]
    fn test_clicked_without_queries_suggests_skill_comparison() {
        let mut t = tracker_with(&["about", "projects", "achievements", "certifications"]);
        t.record_project_click("1");
        assert_eq!(t.next_suggestion().kind, SuggestionKind::CompareSkills);
    }

    #[test]
    fn test_clicked_and_queried_suggests_interactive() {
        let mut t = tracker_with(&["about", "projects", "achievements", "certifications"]);
        t.record_project_click("1");
        t.record_skill_query("python");
        assert_eq!(t.next_suggestion().kind, SuggestionKind::TryInteractive);
    }

    #[test]
    fn test_clicks_do_not_skip_visit_projects() {
        let mut t = tracker_with(&["about"]);
        t.record_project_click("1");
        assert_eq!(t.next_suggestion().kind, SuggestionKind::VisitProjects);
    }

    #[test]
    fn test_next_suggestion_is_pure() {
        let mut t = tracker_with(&["about"]);
        t.record_skill_query("hello");
        let first = t.next_suggestion();
        let second = t.next_suggestion();
        assert_eq!(first, second);
        assert_eq!(t.session().interactions().len(), 2);
    }

    // ---- Related projects ----

    #[test]
    fn test_related_projects_ranked_by_shared_count() {
        let projects = vec![
            project("1", &["Python", "Pandas", "SQL"]),
            project("2", &["SQL"]),
            project("3", &["Python", "Pandas"]),
            project("4", &["Rust"]),
        ];
        let related = SessionTracker::related_projects("1", &projects);
        let ids: Vec<&str> = related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert_eq!(related[0].shared_technologies, 2);
    }

    #[test]
    fn test_related_projects_more_shared_first_then_list_order() {
        let projects = vec![
            project("1", &["A", "B", "C"]),
            project("2", &["A", "B"]),
            project("3", &["C"]),
        ];
        let ids: Vec<String> = SessionTracker::related_projects("1", &projects)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_related_projects_ties_keep_list_order_and_cap_at_two() {
        let projects = vec![
            project("1", &["A"]),
            project("2", &["A"]),
            project("3", &["A"]),
            project("4", &["A"]),
        ];
        let ids: Vec<String> = SessionTracker::related_projects("1", &projects)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_related_projects_unknown_id_is_empty() {
        let portfolio = Portfolio::builtin();
        assert!(SessionTracker::related_projects("nope", &portfolio.projects).is_empty());
    }

    #[test]
    fn test_related_projects_builtin_data() {
        let portfolio = Portfolio::builtin();
        // Diabetes and music projects share only Python; the social network project shares nothing
        let related = SessionTracker::related_projects("1", &portfolio.projects);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "2");
        assert_eq!(related[0].shared_technologies, 1);
    }

    #[test]
    fn test_related_projects_counts_duplicate_tags_once() {
        let projects = vec![project("1", &["A", "A", "B"]), project("2", &["A", "A"])];
        let related = SessionTracker::related_projects("1", &projects);
        assert_eq!(related[0].shared_technologies, 1);
    }
}
