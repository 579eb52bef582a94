//! ATS analyzer: trait seam plus the default rule-based implementation.
//!
//! `AppState` holds an `Arc<dyn ScoreAnalyzer>`, so the handlers never name
//! the concrete analyzer.

use crate::ats::report::{fold_sections, AtsScore, SectionResult};
use crate::ats::rules::SECTION_RULES;
use crate::models::resume::ResumeData;

/// Scores a résumé. Implementations must be pure: same input, same report.
pub trait ScoreAnalyzer: Send + Sync {
    /// Per-section results in evaluation order.
    fn analyze_sections(&self, resume: &ResumeData) -> Vec<SectionResult>;

    fn analyze(&self, resume: &ResumeData) -> AtsScore {
        fold_sections(&self.analyze_sections(resume))
    }

    /// Backend label, surfaced for transparency.
    fn name(&self) -> &'static str;
}

/// Default analyzer: runs the fixed section rule table in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAnalyzer;

impl ScoreAnalyzer for RuleBasedAnalyzer {
    fn analyze_sections(&self, resume: &ResumeData) -> Vec<SectionResult> {
        SECTION_RULES
            .iter()
            .map(|(section, rule)| {
                let mut result = SectionResult::new(*section);
                rule(resume, &mut result);
                result
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}
