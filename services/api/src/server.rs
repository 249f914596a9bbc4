use crate::cli::ServeArgs;
use crate::infra::{seed_demo_cycle, AppState};
use crate::routes::with_recruitment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mozip::config::AppConfig;
use mozip::error::AppError;
use mozip::recruitment::{InMemoryRecruitmentRepository, RecruitmentState, TimeOrderedIds};
use mozip::telemetry;
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
    if args.seed_demo {
        config.storage.seed_demo = true;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryRecruitmentRepository::new());
    if config.storage.seed_demo {
        let cycle = seed_demo_cycle(repository.as_ref(), &TimeOrderedIds)?;
        info!(
            mozip_id = %cycle.mozip_id,
            applicants = cycle.applicants.len(),
            evaluators = cycle.evaluators.len(),
            "seeded sample recruitment cycle"
        );
    }

    let app = with_recruitment_routes(RecruitmentState::new(repository))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "mozip recruitment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
