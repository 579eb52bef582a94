//! Axum route handlers for the ATS scoring API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ats::analyzer::ScoreAnalyzer;
use crate::ats::report::{fold_sections, AtsScore, ScoreBand, SectionResult};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub report: AtsScore,
    pub band: ScoreBand,
    pub headline: String,
    pub sections: Vec<SectionResult>,
    pub analyzer: String,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    pub resumes: Vec<ResumeData>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchScoreResponse {
    pub results: Vec<ScoreResponse>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores one résumé and returns the report with its section breakdown.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(resume) = payload?;
    let response = score_one(state.analyzer.as_ref(), &resume);
    info!(
        score = response.report.score,
        band = response.band.as_str(),
        "Scored resume"
    );
    Ok(Json(response))
}

/// POST /api/v1/ats/score/batch
///
/// Scores several résumés independently. Results keep the request order.
pub async fn handle_score_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchScoreRequest>, JsonRejection>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let Json(request) = payload?;
    if request.resumes.is_empty() {
        return Err(AppError::Validation("resumes cannot be empty".to_string()));
    }
    let max = state.config.max_batch_size;
    if request.resumes.len() > max {
        return Err(AppError::Validation(format!(
            "batch of {} resumes exceeds the limit of {max}",
            request.resumes.len()
        )));
    }

    // Large batches are CPU-bound; keep them off the async workers.
    let analyzer = state.analyzer.clone();
    let results: Vec<ScoreResponse> = tokio::task::spawn_blocking(move || {
        request
            .resumes
            .iter()
            .map(|resume| score_one(analyzer.as_ref(), resume))
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("batch scoring task failed: {e}")))?;

    info!(count = results.len(), "Scored resume batch");
    Ok(Json(BatchScoreResponse { results }))
}

fn score_one(analyzer: &dyn ScoreAnalyzer, resume: &ResumeData) -> ScoreResponse {
    let sections = analyzer.analyze_sections(resume);
    for result in &sections {
        debug!(
            section = result.section.as_str(),
            points = result.points,
            max_points = result.max_points,
            "Section scored"
        );
    }

    let report = fold_sections(&sections);
    let band = ScoreBand::from_score(report.score);

    ScoreResponse {
        headline: band.headline().to_string(),
        band,
        report,
        sections,
        analyzer: analyzer.name().to_string(),
        analyzed_at: Utc::now(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::analyzer::RuleBasedAnalyzer;
    use crate::ats::fixtures::make_complete_resume;

    #[test]
    fn test_score_one_complete_resume_is_excellent() {
        let response = score_one(&RuleBasedAnalyzer, &make_complete_resume());
        assert_eq!(response.report.score, 100);
        assert_eq!(response.band, ScoreBand::Excellent);
        assert_eq!(response.headline, ScoreBand::Excellent.headline());
        assert_eq!(response.sections.len(), 7);
        assert_eq!(response.analyzer, "rule_based");
    }

    #[test]
    fn test_score_one_empty_resume_needs_improvement() {
        let response = score_one(&RuleBasedAnalyzer, &ResumeData::default());
        assert_eq!(response.report.score, 0);
        assert_eq!(response.band, ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_score_response_serializes_camel_case() {
        let response = score_one(&RuleBasedAnalyzer, &ResumeData::default());
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("analyzedAt").is_some());
        assert_eq!(value["band"], "needs_improvement");
        assert_eq!(value["report"]["score"], 0);
        assert!(value["report"]["weaknesses"].is_array());
    }
}
