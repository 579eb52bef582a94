use serde::{Deserialize, Serialize};

/// Highest score the analyzer can report.
pub const MAX_SCORE: u32 = 100;

/// Flat score report: the number plus three feedback channels.
///
/// List order follows the section evaluation order, not importance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    pub score: u32, // 0 – 100
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Contact,
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
}

impl Section {
    /// Point budget for the section. Budgets across all sections sum to 100.
    pub fn max_points(&self) -> u32 {
        match self {
            Section::Contact => 20,
            Section::Summary => 10,
            Section::Education => 15,
            Section::Experience => 25,
            Section::Skills => 15,
            Section::Projects => 10,
            Section::Certifications => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Contact => "contact",
            Section::Summary => "summary",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
        }
    }
}

/// Outcome of scoring one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub section: Section,
    pub points: u32,
    pub max_points: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl SectionResult {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            points: 0,
            max_points: section.max_points(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.points += points;
    }

    pub(crate) fn strength(&mut self, message: impl Into<String>) {
        self.strengths.push(message.into());
    }

    pub(crate) fn weakness(&mut self, message: impl Into<String>) {
        self.weaknesses.push(message.into());
    }

    pub(crate) fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }
}

/// Folds section results, in order, into the flat report.
///
/// Points are summed and clamped to [`MAX_SCORE`]; feedback lists are
/// concatenated in section order.
pub fn fold_sections(sections: &[SectionResult]) -> AtsScore {
    let mut report = AtsScore::default();
    let mut total = 0_u32;

    for result in sections {
        total = total.saturating_add(result.points);
        report.strengths.extend(result.strengths.iter().cloned());
        report.weaknesses.extend(result.weaknesses.iter().cloned());
        report.suggestions.extend(result.suggestions.iter().cloned());
    }

    report.score = total.min(MAX_SCORE);
    report
}

/// Presentation band for a score. Derived from the score, never fed back into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your resume is highly ATS-optimized.",
            ScoreBand::Good => "Good, but there's room for improvement.",
            ScoreBand::NeedsImprovement => "Needs improvement to pass ATS screening.",
        }
    }
}
