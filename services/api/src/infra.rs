use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use concierge_hiring::config::ScreeningConfig;
use concierge_hiring::screening::{CriteriaSet, ScreeningService};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) screening_config: Arc<ScreeningConfig>,
}

/// Service wired with the standard Guest Experience Supervisor rubric; per
/// request rubric overrides still apply on top.
pub(crate) fn default_screening_service(config: &ScreeningConfig) -> ScreeningService {
    ScreeningService::with_top_strengths(CriteriaSet::standard(), config.top_strengths)
}

pub(crate) fn default_screening_config() -> ScreeningConfig {
    ScreeningConfig {
        default_role_title: "Guest Experience Supervisor".to_string(),
        top_strengths: 2,
        slot_count: 5,
    }
}
