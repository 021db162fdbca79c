use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nirvahatech::config::{AppConfig, IntakeConfig};
use nirvahatech::error::AppError;
use nirvahatech::forms::{FormRegistry, HttpIntakeGateway, IntakeGateway};
use nirvahatech::telemetry;
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
    if let Some(api_base) = args.api_base.take() {
        config.intake = IntakeConfig::new(&api_base)?;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let gateway: Arc<dyn IntakeGateway> = Arc::new(HttpIntakeGateway::new(config.intake.clone())?);
    let registry = Arc::new(FormRegistry::new(gateway, config.forms.clone()));

    let app = with_site_routes(registry)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        api_base = config.intake.api_base(),
        "nirvahatech site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
