//! Reply text for the companion.
//!
//! Fixed paragraphs are kept verbatim as constants; everything that quotes
//! portfolio data is composed from the loaded fixtures at reply time.

use std::sync::Arc;

use serde::Serialize;

use folio_core::fixtures::Portfolio;

use crate::parser::{ProjectTopic, SkillTopic};
use crate::session::{Session, Suggestion};

// =============================================================================
// Fixed text
// =============================================================================

/// Reply to the first utterance of a session.
pub const INTRODUCTION: &str = "🙏 Namaste! I'm Medhasa (मेधासा), Srinivas's AI assistant and your personal portfolio guide. I'm powered by the same AI principles that drive his projects!\n\n✨ **I can help you:**\n• Explore his technical skills & expertise\n• Dive deep into his innovative projects\n• Understand his achievements & background\n• Try live AI demos & interactive tools\n• Generate tailored resumes for different roles\n• Challenge you with AI/ML quizzes\n• Show future career predictions\n\n🚀 Ready to discover what makes Srinivas an exceptional AI/ML enthusiast and developer? What interests you most?";

/// Bot message posted shortly after the widget first opens.
pub const WELCOME_ON_OPEN: &str = "🙏 Namaste! I'm Medhasa (मेधासा), Srinivas's AI assistant and your personal portfolio guide. I'm powered by the same AI principles that drive his projects!\n\n✨ **I can help you:**\n• Explore his technical skills & expertise\n• Dive deep into his innovative projects\n• Understand his achievements & background\n• Try live AI demos & interactive tools\n• Generate tailored resumes for different roles\n\n🚀 Ready to discover what makes Srinivas an exceptional AI/ML enthusiast and developer? What interests you most?";

pub const QUOTES: [&str; 6] = [
    "🕉️ **Bhagavad Gita**: 'विद्या ददाति विनयं' - Knowledge gives humility. Just as neural networks learn from each data point with patience, true wisdom comes from continuous learning and staying humble before the vastness of AI possibilities.",
    "🌟 **Bhagavad Gita**: 'कर्मण्येवाधिकारस्ते मा फलेषु कदाचन' - You have the right to perform action, but not to the fruits of action. In machine learning, focus on perfecting your algorithms and models; success will follow naturally.",
    "💡 **Upanishads**: 'सत्यमेव जयते' - Truth alone triumphs. In data science, let authentic insights emerge when we allow the data to speak its truth, free from our biases and preconceptions.",
    "🚀 **Mahabharata**: 'धर्मे चार्थे च कामे च मोक्षे च भरतर्षभ' - Balance dharma (purpose), artha (resources), kama (passion), and moksha (liberation). In AI development, balance ethical responsibility, practical utility, creative passion, and the freedom to innovate.",
    "🧠 **Upanishads**: 'यत्र नान्यत्पश्यति नान्यच्छृणोति नान्यद्विजानाति स भूमा' - Where one sees nothing else, hears nothing else, knows nothing else, that is infinite. Like AI approaching AGI, true understanding transcends individual data points to grasp the universal patterns.",
    "⚡ **Mahabharata**: 'अभ्यासे वश इच्छन्ति' - Mastery comes through practice. Like training deep neural networks through countless epochs, consistent practice and iteration lead to breakthrough understanding.",
];

/// A fact shown in the ambient popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const AI_FACTS: [Fact; 4] = [
    Fact {
        title: "Machine Learning Magic",
        description: "ML algorithms can learn patterns from data without being explicitly programmed for each scenario!",
        icon: "🤖",
    },
    Fact {
        title: "AI Processing Power",
        description: "Modern AI models like GPT have billions of parameters - more than there are stars in our galaxy!",
        icon: "⭐",
    },
    Fact {
        title: "Data Science Impact",
        description: "Data scientists help companies make decisions that can increase revenue by 15-20% on average!",
        icon: "📊",
    },
    Fact {
        title: "Python Popularity",
        description: "Python is used by 85% of data scientists worldwide - it's the Swiss Army knife of programming!",
        icon: "🐍",
    },
];

pub const SKILL_VISUALIZER_OPENED: &str = "🎯 Opening the AI-powered skill visualizer! Compare technologies and see real-time proficiency analysis with predictive insights.";
pub const RESUME_GENERATOR_OPENED: &str = "📄 Launching the intelligent Resume Generator! AI will craft role-specific resumes optimized for ATS systems and recruiter preferences.";
pub const AI_DEMO_OPENED: &str = "🎵 Opening Try My AI section! Experience live music genre classification and sentiment analysis demos.";
pub const ML_DEMO_OPENED: &str = "🤖 Starting the live ML playground! Experience real-time classification with feature importance analysis and model interpretability.";
pub const QUIZ_OPENED: &str = "🎯 Challenge accepted! Let's test your AI/ML knowledge with an interactive quiz featuring real-time scoring, streak tracking, and detailed explanations. Ready to compete with Medhasa's intelligence?";
pub const CAREER_PREDICTOR_OPENED: &str = "🔮 Activating AI-powered career forecasting! Analyzing Srinivas's current trajectory to project skill evolution, salary growth, and strategic career opportunities over the next 5 years. Want to see where his skills lead?";

pub const DIABETES_PROJECT: &str = "🏥 The Diabetes Prediction project is truly impressive! Srinivas built a comprehensive ML pipeline using Python, Pandas, and Scikit-learn. The model achieved 85% accuracy through careful data preprocessing, feature engineering, and hyperparameter tuning. It includes data visualization, correlation analysis, and model comparison between Random Forest, Logistic Regression, and SVM. Want to explore the technical implementation?";
pub const MUSIC_GENRE_PROJECT: &str = "🎵 The Music Genre Classification project showcases Srinivas's expertise in deep learning and audio processing! Using TensorFlow, he implemented a CNN model that processes audio spectrograms to classify music into genres like Rock, Pop, Jazz, and Classical. The project includes feature extraction using librosa, data augmentation, and model optimization techniques!";
pub const ECOMMERCE_PROJECT: &str = "🛒 The E-commerce Platform demonstrates full-stack development skills! Built with React.js frontend, it features user authentication, product catalog, shopping cart, and payment integration. The project showcases modern web development practices with responsive design and state management.";
pub const WEATHER_PROJECT: &str = "🌤️ The Weather Application shows API integration skills! Using React and external weather APIs, it provides real-time weather data, forecasts, and location-based services. Clean UI design with dynamic weather icons and responsive layout!";

pub const PYTHON_SKILL: &str = "🐍 Python is one of Srinivas's strongest skills! He's proficient in data analysis with Pandas & NumPy, ML with TensorFlow & Scikit-learn, visualization with Matplotlib & Seaborn, and web development with Flask & Django. His Python expertise spans from data preprocessing to deploying production ML models. Want to see a detailed breakdown?";
pub const JAVA_SKILL: &str = "☕ Java expertise includes object-oriented programming, data structures & algorithms, and enterprise application development. Srinivas has solid fundamentals in Java with practical project experience in building scalable applications and understanding of design patterns!";
pub const MACHINE_LEARNING_SKILL: &str = "🤖 AI/ML is Srinivas's passion! He specializes in supervised learning, classification models, data preprocessing, feature engineering, and model evaluation. His expertise includes TensorFlow, Scikit-learn, ensemble methods, and deep learning. Check out his diabetes prediction and music genre classification projects to see these skills in action!";

const ABOUT_TRAILER: &str = " He's passionate about AI, machine learning, and data analysis, constantly learning and building innovative solutions.";

const DEEP_EXPLORER_PREFIX: &str = "I see you're thoroughly exploring! Based on your interests, you might enjoy the AI Quiz challenge. ";
const FIRST_VISIT_PREFIX: &str = "Welcome to my AI-powered tour! I'll adapt my responses based on what interests you most. ";
const FALLBACK_MENU: &str = "That's an interesting question! I can tell you about Srinivas's projects, skills, achievements, certifications. Or try:\n\n🎯 \"Challenge me with a quiz\"\n🔮 \"Show career predictions\"\n🎵 \"Try my AI demos\"\n💡 Type \"inspire me\" for wisdom\n\n";

// =============================================================================
// ResponseGenerator
// =============================================================================

/// Composes replies that quote portfolio data.
#[derive(Debug, Clone)]
pub struct ResponseGenerator {
    portfolio: Arc<Portfolio>,
}

impl ResponseGenerator {
    pub fn new(portfolio: Arc<Portfolio>) -> Self {
        Self { portfolio }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    fn first_name(&self) -> &str {
        self.portfolio
            .personal
            .name
            .split_whitespace()
            .next()
            .unwrap_or("He")
    }

    pub fn project(&self, topic: Option<ProjectTopic>) -> String {
        match topic {
            Some(ProjectTopic::Diabetes) => DIABETES_PROJECT.to_string(),
            Some(ProjectTopic::MusicGenre) => MUSIC_GENRE_PROJECT.to_string(),
            Some(ProjectTopic::Ecommerce) => ECOMMERCE_PROJECT.to_string(),
            Some(ProjectTopic::Weather) => WEATHER_PROJECT.to_string(),
            None => self.project_summary(),
        }
    }

    fn project_summary(&self) -> String {
        let projects = &self.portfolio.projects;
        let listing: String = projects
            .iter()
            .map(|p| format!("• {}\n", p.title))
            .collect();
        format!(
            "💼 {} has crafted an impressive portfolio of {} projects showcasing diverse technical skills:\n\n{}\nWhich project would you like to explore in detail?",
            self.first_name(),
            projects.len(),
            listing
        )
    }

    pub fn skills(&self, topic: Option<SkillTopic>) -> String {
        match topic {
            Some(SkillTopic::Python) => PYTHON_SKILL.to_string(),
            Some(SkillTopic::Java) => JAVA_SKILL.to_string(),
            Some(SkillTopic::MachineLearning) => MACHINE_LEARNING_SKILL.to_string(),
            None => {
                let categories: Vec<&str> = self
                    .portfolio
                    .skills
                    .iter()
                    .map(|c| c.category.as_str())
                    .collect();
                format!(
                    "🎯 {} is skilled in {} technologies across {} categories: {}. His expertise spans from Python data science to full-stack development. Try asking \"Show me Python vs Java\" to see the interactive skill visualizer with real-time comparisons!",
                    self.first_name(),
                    self.portfolio.technology_count(),
                    categories.len(),
                    categories.join(", ")
                )
            }
        }
    }

    pub fn achievements(&self) -> String {
        let achievements = &self.portfolio.achievements;
        let titles: Vec<&str> = achievements.iter().map(|a| a.title.as_str()).collect();
        format!(
            "🏆 {} has achieved remarkable success with {} major achievements including {}. These showcase his excellence in AI and data science competitions! Each achievement represents dedication to continuous learning and innovation.",
            self.first_name(),
            achievements.len(),
            titles.join(", ")
        )
    }

    pub fn certifications(&self) -> String {
        format!(
            "🎓 {} holds {} professional certifications from leading organizations. These validate his expertise in AI, ML, and data science domains, demonstrating commitment to formal learning and industry standards.",
            self.first_name(),
            self.portfolio.certifications.len()
        )
    }

    pub fn about(&self) -> String {
        format!("{}{}", self.portfolio.personal.bio, ABOUT_TRAILER)
    }

    pub fn contact(&self) -> String {
        format!(
            "You can reach {} at {} or connect with him on LinkedIn. He's always open to discussing AI, ML projects, and collaboration opportunities!",
            self.first_name(),
            self.portfolio.personal.email
        )
    }

    /// Catch-all reply: a personalised prefix, the prompt menu and the
    /// session's current suggestion.
    pub fn fallback(&self, session: &Session, suggestion: &Suggestion) -> String {
        let sections = session.visited_sections().len();
        let clicks = session.clicked_project_ids().len();
        let prefix = if sections > 3 && clicks > 1 {
            DEEP_EXPLORER_PREFIX
        } else if sections == 1 {
            FIRST_VISIT_PREFIX
        } else {
            ""
        };
        format!("{prefix}{FALLBACK_MENU}{}", suggestion.text)
    }
}
