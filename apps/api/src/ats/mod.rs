// ATS scoring engine
// Implements: section rule table, section fold, score bands, scoring endpoints.
// Scoring is pure and synchronous; handlers call it inline.

pub mod analyzer;
pub mod handlers;
pub mod report;
pub mod rules;

#[cfg(test)]
pub(crate) mod fixtures;

pub use analyzer::{RuleBasedAnalyzer, ScoreAnalyzer};
