//! Career projections shown by the career predictor.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityTier {
    High,
    Medium,
    Low,
}

impl ProbabilityTier {
    pub fn from_percent(probability: u8) -> Self {
        match probability {
            80.. => ProbabilityTier::High,
            60..=79 => ProbabilityTier::Medium,
            _ => ProbabilityTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerProjection {
    pub year: u16,
    pub role: &'static str,
    pub skills: &'static [&'static str],
    /// Annual salary in USD.
    pub salary: u32,
    /// Likelihood in percent.
    pub probability: u8,
    pub description: &'static str,
}

impl CareerProjection {
    pub fn tier(&self) -> ProbabilityTier {
        ProbabilityTier::from_percent(self.probability)
    }

    /// Salary as shown on the timeline, e.g. `120K`.
    pub fn salary_label(&self) -> String {
        format!("{}K", self.salary / 1000)
    }
}

pub const PROJECTIONS: [CareerProjection; 2] = [
    CareerProjection {
        year: 2025,
        role: "Senior ML Engineer",
        skills: &["Advanced Python", "TensorFlow", "MLOps", "Cloud Platforms"],
        salary: 120_000,
        probability: 85,
        description: "Leading ML model development and deployment in production environments",
    },
    CareerProjection {
        year: 2027,
        role: "AI Research Scientist",
        skills: &[
            "Research Methodology",
            "Publications",
            "Advanced Mathematics",
            "Novel Algorithms",
        ],
        salary: 160_000,
        probability: 72,
        description: "Conducting cutting-edge AI research and contributing to breakthrough innovations",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ProbabilityTier::from_percent(100), ProbabilityTier::High);
        assert_eq!(ProbabilityTier::from_percent(80), ProbabilityTier::High);
        assert_eq!(ProbabilityTier::from_percent(79), ProbabilityTier::Medium);
        assert_eq!(ProbabilityTier::from_percent(60), ProbabilityTier::Medium);
        assert_eq!(ProbabilityTier::from_percent(59), ProbabilityTier::Low);
    }

    #[test]
    fn test_projection_tiers() {
        assert_eq!(PROJECTIONS[0].tier(), ProbabilityTier::High);
        assert_eq!(PROJECTIONS[1].tier(), ProbabilityTier::Medium);
        assert_eq!(PROJECTIONS[1].salary_label(), "160K");
    }

    #[test]
    fn test_projections_are_chronological() {
        assert!(PROJECTIONS.windows(2).all(|w| w[0].year < w[1].year));
    }
}
