//! Role-tailored resume assembly.

use std::fmt;

use serde::Serialize;

use folio_core::fixtures::{
    Achievement, Certification, Education, Experience, PersonalInfo, Portfolio, Project,
};

const MAX_PROJECTS: usize = 3;
const MAX_CERTIFICATIONS: usize = 3;
const MAX_ACHIEVEMENTS: usize = 3;
const MAX_EXPERIENCE: usize = 2;

/// Certification names containing any of these (lower-cased) are relevant.
static CERTIFICATION_KEYWORDS: &[&str] = &["ai", "ml", "data", "python"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumeRole {
    AiMl,
    DataAnalyst,
    SoftwareDeveloper,
}

impl ResumeRole {
    pub const ALL: [ResumeRole; 3] = [
        ResumeRole::AiMl,
        ResumeRole::DataAnalyst,
        ResumeRole::SoftwareDeveloper,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ResumeRole::AiMl => "ai-ml",
            ResumeRole::DataAnalyst => "data-analyst",
            ResumeRole::SoftwareDeveloper => "software-developer",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id.trim())
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResumeRole::AiMl => "AI & ML Engineer",
            ResumeRole::DataAnalyst => "Data Analyst",
            ResumeRole::SoftwareDeveloper => "Software Developer",
        }
    }

    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            ResumeRole::AiMl => &[
                "Python",
                "TensorFlow",
                "Scikit-learn",
                "Machine Learning",
                "Pandas",
                "NumPy",
            ],
            ResumeRole::DataAnalyst => &[
                "Python",
                "SQL",
                "Power BI",
                "Pandas",
                "Matplotlib",
                "Seaborn",
                "MySQL",
                "PostgreSQL",
            ],
            ResumeRole::SoftwareDeveloper => {
                &["Python", "Java", "SQL", "Flask", "Git", "C", "Streamlit"]
            }
        }
    }

    /// A project qualifies when it uses any of these technologies.
    fn project_filter(&self) -> &'static [&'static str] {
        match self {
            ResumeRole::AiMl => &["Python", "TensorFlow", "Scikit-learn", "Machine Learning"],
            ResumeRole::DataAnalyst => &["SQL", "Power BI", "Pandas", "MySQL", "PostgreSQL"],
            ResumeRole::SoftwareDeveloper => &["Java", "Flask", "Streamlit", "Git"],
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ResumeRole::AiMl => "Passionate AI & ML Engineer with expertise in developing intelligent systems and machine learning models. Proven track record in implementing ML algorithms and creating data-driven solutions.",
            ResumeRole::DataAnalyst => "Detail-oriented Data Analyst with strong analytical skills and expertise in extracting actionable insights from complex datasets. Proficient in statistical analysis and data visualization.",
            ResumeRole::SoftwareDeveloper => "Versatile Software Developer with strong programming fundamentals and experience in full-stack development. Skilled in multiple programming languages and frameworks.",
        }
    }

    pub fn highlights(&self) -> &'static [&'static str] {
        match self {
            ResumeRole::AiMl => &[
                "Expert in ML algorithms and deep learning frameworks",
                "Experience with TensorFlow, Scikit-learn, and Python ecosystem",
                "Strong background in statistical analysis and data modeling",
                "Proven ability to deploy ML models in production environments",
            ],
            ResumeRole::DataAnalyst => &[
                "Advanced SQL and database management skills",
                "Expert in data visualization with Power BI and Python libraries",
                "Strong statistical analysis and reporting capabilities",
                "Experience in business intelligence and dashboard creation",
            ],
            ResumeRole::SoftwareDeveloper => &[
                "Proficient in multiple programming languages (Python, Java, C)",
                "Experience with web frameworks and application development",
                "Strong problem-solving and algorithmic thinking skills",
                "Familiar with version control and software development lifecycle",
            ],
        }
    }
}

impl fmt::Display for ResumeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A resume assembled for one role from the portfolio fixtures.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub role: ResumeRole,
    pub title: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub personal: PersonalInfo,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
}

/// Assemble the resume for `role`.
pub fn tailor(role: ResumeRole, portfolio: &Portfolio) -> Resume {
    let filter = role.project_filter();
    let projects = portfolio
        .projects
        .iter()
        .filter(|p| filter.iter().any(|tech| p.uses(tech)))
        .take(MAX_PROJECTS)
        .cloned()
        .collect();

    let certifications = portfolio
        .certifications
        .iter()
        .filter(|c| {
            let name = c.name.to_lowercase();
            CERTIFICATION_KEYWORDS.iter().any(|k| name.contains(k))
        })
        .take(MAX_CERTIFICATIONS)
        .cloned()
        .collect();

    Resume {
        role,
        title: role.title(),
        summary: role.summary(),
        skills: role.skills(),
        highlights: role.highlights(),
        personal: portfolio.personal.clone(),
        projects,
        education: portfolio.education.clone(),
        experience: portfolio
            .experience
            .iter()
            .take(MAX_EXPERIENCE)
            .cloned()
            .collect(),
        achievements: portfolio
            .achievements
            .iter()
            .take(MAX_ACHIEVEMENTS)
            .cloned()
            .collect(),
        certifications,
    }
}
