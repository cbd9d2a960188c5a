//! Skill visualizer query parsing.

use serde::Serialize;

use folio_core::fixtures::Portfolio;

/// Proficiency used for technologies missing from the table.
pub const DEFAULT_PROFICIENCY: u8 = 70;

/// Most skills shown side by side in a comparison.
const MAX_COMPARED: usize = 4;

/// Self-assessed proficiency, in table order.
static PROFICIENCY: &[(&str, u8)] = &[
    ("Python", 95),
    ("Java", 80),
    ("SQL", 90),
    ("C", 75),
    ("Scikit-learn", 88),
    ("TensorFlow", 85),
    ("Pandas", 92),
    ("NumPy", 90),
    ("Machine Learning", 90),
    ("MySQL", 85),
    ("PostgreSQL", 80),
    ("Azure", 75),
    ("Power BI", 82),
    ("Matplotlib", 85),
    ("Seaborn", 85),
    ("Streamlit", 80),
    ("Flask", 78),
    ("Git", 85),
    ("Jupyter", 88),
    ("R", 70),
    ("Kaggle", 85),
];

pub fn proficiency(skill: &str) -> u8 {
    PROFICIENCY
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_PROFICIENCY)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillLevel {
    pub name: String,
    pub proficiency: u8,
}

impl SkillLevel {
    fn of(name: &str) -> Self {
        Self {
            name: name.to_string(),
            proficiency: proficiency(name),
        }
    }
}

/// What the visualizer shows for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SkillView {
    /// Two or more skills named: compare the first four.
    Comparison { skills: Vec<SkillLevel> },
    /// One skill named: its fixture category.
    Category { category: String },
    All,
}

impl SkillView {
    /// Pick a view from the query that opened the visualizer.
    pub fn from_query(query: &str, portfolio: &Portfolio) -> Self {
        let q = query.to_lowercase();
        let mentioned: Vec<&str> = PROFICIENCY
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| mentions(&q, name))
            .collect();

        match mentioned.as_slice() {
            [] => SkillView::All,
            [single] => match portfolio.category_of(single) {
                Some(category) => SkillView::Category {
                    category: category.to_string(),
                },
                None => SkillView::All,
            },
            many => SkillView::Comparison {
                skills: many
                    .iter()
                    .take(MAX_COMPARED)
                    .map(|name| SkillLevel::of(name))
                    .collect(),
            },
        }
    }

    /// Bars to draw for this view.
    pub fn levels(&self, portfolio: &Portfolio) -> Vec<SkillLevel> {
        match self {
            SkillView::Comparison { skills } => skills.clone(),
            SkillView::Category { category } => portfolio
                .skills
                .iter()
                .filter(|c| &c.category == category)
                .flat_map(|c| c.technologies.iter())
                .map(|t| SkillLevel::of(t))
                .collect(),
            SkillView::All => portfolio
                .skills
                .iter()
                .flat_map(|c| c.technologies.iter())
                .map(|t| SkillLevel::of(t))
                .collect(),
        }
    }
}

/// Substring match, except one-letter names ("C", "R") which must stand
/// alone as a word.
fn mentions(lower_query: &str, skill: &str) -> bool {
    let needle = skill.to_lowercase();
    if needle.chars().count() > 1 {
        return lower_query.contains(&needle);
    }
    lower_query
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::builtin()
    }

    #[test]
    fn test_python_vs_java_is_comparison() {
        let view = SkillView::from_query("Show me Python vs Java skills", &portfolio());
        assert_eq!(
            view,
            SkillView::Comparison {
                skills: vec![
                    SkillLevel { name: "Python".into(), proficiency: 95 },
                    SkillLevel { name: "Java".into(), proficiency: 80 },
                ]
            }
        );
    }

    #[test]
    fn test_comparison_capped_at_four_in_table_order() {
        let view = SkillView::from_query(
            "show kaggle, git, flask, pandas, numpy and python",
            &portfolio(),
        );
        let SkillView::Comparison { skills } = view else {
            panic!("expected comparison");
        };
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "Pandas", "NumPy", "Flask"]);
    }

    #[test]
    fn test_single_skill_selects_category() {
        let view = SkillView::from_query("show tensorflow skill", &portfolio());
        assert_eq!(
            view,
            SkillView::Category {
                category: "Data Science & ML".to_string()
            }
        );
        let levels = view.levels(&portfolio());
        assert_eq!(levels.len(), 5);
        assert_eq!(levels[0].name, "Scikit-learn");
    }

    #[test]
    fn test_single_skill_outside_fixtures_shows_all() {
        let view = SkillView::from_query("show kaggle skill", &portfolio());
        assert_eq!(view, SkillView::All);
        assert_eq!(view.levels(&portfolio()).len(), 19);
    }

    #[test]
    fn test_no_skill_shows_all() {
        assert_eq!(SkillView::from_query("show skills", &portfolio()), SkillView::All);
    }

    #[test]
    fn test_one_letter_names_need_whole_word() {
        assert!(!mentions("show me your scores", "C"));
        assert!(mentions("show c vs r", "C"));
        assert!(mentions("show c vs r", "R"));
    }

    #[test]
    fn test_unknown_proficiency_defaults() {
        assert_eq!(proficiency("Keras"), DEFAULT_PROFICIENCY);
        assert_eq!(proficiency("Pandas"), 92);
    }
}
