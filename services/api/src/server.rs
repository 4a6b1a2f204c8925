use crate::cli::ServeArgs;
use crate::infra::{default_screening_service, AppState};
use crate::routes::with_screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use concierge_hiring::config::AppConfig;
use concierge_hiring::error::AppError;
use concierge_hiring::screening::ScreeningState;
use concierge_hiring::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        screening_config: Arc::new(config.screening.clone()),
    };

    let screening_service = default_screening_service(&config.screening);
    let screening_state = ScreeningState::new(screening_service);

    let app = with_screening_routes(screening_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "concierge hiring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
