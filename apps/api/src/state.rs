use std::sync::Arc;

use crate::ats::ScoreAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: RuleBasedAnalyzer.
    pub analyzer: Arc<dyn ScoreAnalyzer>,
}
