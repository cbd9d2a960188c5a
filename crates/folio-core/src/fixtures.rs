//! Static portfolio data.
//!
//! Loaded once at startup, either from the built-in set or from a JSON file
//! with the same shape, and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub technologies: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Technology tags, compared as a set; authoring order is kept for display.
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub github_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| t == technology)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub highlights: Vec<String>,
}

/// The full read-only fixture set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Portfolio {
    /// Load a portfolio from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let portfolio: Portfolio = serde_json::from_str(&content)?;
        if portfolio.projects.iter().any(|p| p.id.is_empty()) {
            return Err(FolioError::Fixture(format!(
                "{}: every project needs a non-empty id",
                path.display()
            )));
        }
        info!(
            projects = portfolio.projects.len(),
            "Portfolio fixtures loaded from {}",
            path.display()
        );
        Ok(portfolio)
    }

    /// Load from `path` when given, falling back to the built-in data.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(portfolio) => portfolio,
            Err(e) => {
                warn!(
                    "Failed to load fixtures from {}: {}. Using built-in portfolio.",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Total number of technologies across all skill categories.
    pub fn technology_count(&self) -> usize {
        self.skills.iter().map(|c| c.technologies.len()).sum()
    }

    /// Name of the skill category listing `technology`, if any.
    pub fn category_of(&self, technology: &str) -> Option<&str> {
        self.skills
            .iter()
            .find(|c| c.technologies.iter().any(|t| t == technology))
            .map(|c| c.category.as_str())
    }

    /// The built-in portfolio.
    pub fn builtin() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            personal: PersonalInfo {
                name: "Srinivas Erramalla".to_string(),
                title: "Fresher • AI/ML Enthusiast • Data Analyst".to_string(),
                email: "srinivaserramalla5@gmail.com".to_string(),
                location: "Hyderabad, India".to_string(),
                bio: "Detail-oriented and motivated B.Tech Computer Science Engineering student with strong foundations in Python, SQL, and data analytics. Experienced in machine learning, statistical modeling, and data visualization, with hands-on exposure to real-world healthcare datasets, ETL workflows, and predictive modeling.".to_string(),
            },
            skills: vec![
                SkillCategory {
                    category: "Programming Languages".to_string(),
                    technologies: strings(&["Python", "Java", "SQL", "C"]),
                },
                SkillCategory {
                    category: "Data Science & ML".to_string(),
                    technologies: strings(&[
                        "Scikit-learn",
                        "TensorFlow",
                        "Pandas",
                        "NumPy",
                        "Machine Learning",
                    ]),
                },
                SkillCategory {
                    category: "Databases & Cloud".to_string(),
                    technologies: strings(&["MySQL", "PostgreSQL", "Azure", "Git", "Power BI"]),
                },
                SkillCategory {
                    category: "Visualization & Tools".to_string(),
                    technologies: strings(&[
                        "Streamlit",
                        "Flask",
                        "Matplotlib",
                        "Seaborn",
                        "Jupyter Notebook",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    id: "1".to_string(),
                    title: "Advanced Diabetes Diagnosis Using 5G Technology and Healthcare Big Data Cloud for Personalized Care".to_string(),
                    description: "Designed and implemented ML models for early diabetes detection using healthcare big data and 5G-enabled cloud integration. Compared Decision Tree, SVM, ANN, and Ensemble Learning through a Tkinter GUI.".to_string(),
                    technologies: strings(&[
                        "Python",
                        "Scikit-learn",
                        "Pandas",
                        "NumPy",
                        "Tkinter",
                        "Matplotlib",
                    ]),
                    status: ProjectStatus::Completed,
                    featured: true,
                    github_url: "https://github.com/Srinivas-Vid/Advanced-Diabetes-Diagnosis-Using-5G-Technology-and-Healthcare-Big-Data-Cloud-for-Personalized-Care".to_string(),
                    live_url: None,
                },
                Project {
                    id: "2".to_string(),
                    title: "Music Genre Classification using CNN".to_string(),
                    description: "Deep learning model using Convolutional Neural Networks to classify music tracks into genres with 85% accuracy, with Librosa feature extraction.".to_string(),
                    technologies: strings(&[
                        "Python",
                        "Flask",
                        "TensorFlow",
                        "Keras",
                        "Librosa",
                        "MySQL",
                        "HTML",
                        "CSS",
                        "JavaScript",
                        "FFmpeg",
                    ]),
                    status: ProjectStatus::Completed,
                    featured: true,
                    github_url: "https://github.com/Srinivas-Vid/The-Genre-Lab---Music-Genre-Classification".to_string(),
                    live_url: None,
                },
                Project {
                    id: "3".to_string(),
                    title: "Safeguarding User Information in Contextual Social Networks".to_string(),
                    description: "Privacy-focused profile matching for social networks using homomorphic encryption and a context-aware access control model.".to_string(),
                    technologies: strings(&[
                        "Java",
                        "JSP",
                        "Servlets",
                        "JDBC",
                        "MySQL",
                        "HTML",
                        "CSS",
                        "JavaScript",
                        "Apache Tomcat",
                        "AES",
                        "RSA",
                    ]),
                    status: ProjectStatus::Completed,
                    featured: true,
                    github_url: "https://github.com/Srinivas-Vid/".to_string(),
                    live_url: None,
                },
            ],
            achievements: vec![
                Achievement {
                    title: "🥇 1st place in Techignite 2024".to_string(),
                    description: "AI-based technical presentation competition winner".to_string(),
                    date: "2024".to_string(),
                },
                Achievement {
                    title: "🥈 2nd place in Tech Resonance 2022".to_string(),
                    description: "Application development competition runner-up".to_string(),
                    date: "2022".to_string(),
                },
            ],
            certifications: [
                ("Python Certification", "Kaggle", "2024"),
                (
                    "Oracle Cloud Infrastructure 2025 Certified AI Foundations Associate",
                    "Oracle",
                    "2025",
                ),
                (
                    "Oracle Cloud Infrastructure 2025 Certified Data Science Professional",
                    "Oracle",
                    "2025",
                ),
                (
                    "Oracle Cloud Infrastructure 2025 Certified Generative AI Professional",
                    "Oracle",
                    "2025",
                ),
                ("Data Science & Analytics", "HP Life and HP Foundation", "2025"),
                ("Data Skills & AI", "YBI Foundation", "2024"),
                ("Demystifying Generative AI for Leaders", "Infosys Springboard", "2024"),
                ("TCS ION Career Edge – Young Professional", "TCS", "2024"),
            ]
            .into_iter()
            .map(|(name, issuer, date)| Certification {
                name: name.to_string(),
                issuer: issuer.to_string(),
                date: date.to_string(),
            })
            .collect(),
            education: vec![
                Education {
                    institution: "Avanthi Institute of Engineering and Technology".to_string(),
                    degree: "Bachelor of Technology in Computer Science and Engineering".to_string(),
                    duration: "Nov 2021 – July 2025".to_string(),
                },
                Education {
                    institution: "SR Junior College".to_string(),
                    degree: "Intermediate in MPC".to_string(),
                    duration: "July 2019 – March 2021".to_string(),
                },
            ],
            experience: vec![
                Experience {
                    title: "Artificial Intelligence Intern".to_string(),
                    company: "Edunet Foundation".to_string(),
                    duration: "Nov 2024 – Jan 2025".to_string(),
                    highlights: strings(&[
                        "Built an NLP-based chatbot in Python using NLTK & SpaCy for real-time assistance",
                        "Designed a Streamlit-based interface for seamless user interaction",
                    ]),
                },
                Experience {
                    title: "Data Analyst Intern".to_string(),
                    company: "Vodafone Idea & Connecting Dreams Foundation".to_string(),
                    duration: "June 2024 – July 2024".to_string(),
                    highlights: strings(&[
                        "Created interactive Power BI dashboards for business reporting",
                        "Developed ETL pipelines for structured and unstructured data ingestion",
                    ]),
                },
            ],
        }
    }
}
