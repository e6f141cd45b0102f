use disc_profile::config::ScoringConfig;
use disc_profile::error::AppError;
use disc_profile::scoring::{
    AssessmentService, InMemoryResultRepository, ProfileScorer, TokenMapSource,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Scoring service wired to the process-local result store.
pub(crate) type ResultService = AssessmentService<InMemoryResultRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Picks the token map from a CLI override, falling back to configuration.
pub(crate) fn token_map_source(
    config: &ScoringConfig,
    override_value: Option<&str>,
) -> TokenMapSource {
    override_value
        .map(TokenMapSource::parse)
        .unwrap_or_else(|| config.token_map.clone())
}

pub(crate) fn build_scorer(source: &TokenMapSource) -> Result<ProfileScorer, AppError> {
    let tokens = source.load()?;
    info!(token_map = ?source, "token map loaded");
    Ok(ProfileScorer::new(tokens))
}

pub(crate) fn build_service(source: &TokenMapSource) -> Result<Arc<ResultService>, AppError> {
    let scorer = Arc::new(build_scorer(source)?);
    let repository = Arc::new(InMemoryResultRepository::default());
    Ok(Arc::new(AssessmentService::new(scorer, repository)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_override_wins_over_configuration() {
        let config = ScoringConfig {
            token_map: TokenMapSource::TraitKeys,
        };

        assert_eq!(
            token_map_source(&config, Some("column-letters")),
            TokenMapSource::ColumnLetters
        );
        assert_eq!(token_map_source(&config, None), TokenMapSource::TraitKeys);
    }

    #[test]
    fn missing_token_map_file_fails_scorer_construction() {
        let source = TokenMapSource::File(PathBuf::from("/nonexistent/disc-map.json"));
        let err = build_scorer(&source).expect_err("file is missing");
        assert!(matches!(err, AppError::TokenMap(_)));
    }

    #[test]
    fn service_scores_with_the_selected_map() {
        let service = build_service(&TokenMapSource::ColumnLetters).expect("built-in map loads");
        let answers = vec![disc_profile::scoring::Answer::new(1u32, "B", "A")];

        let result = service.score(&answers).expect("answers score");
        assert_eq!(result.profile, "IS");
    }
}
