use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use ketravelan::config::Config;
use ketravelan::core::session::ROLE_HEADER;
use ketravelan::middleware::{RequestId, SessionContext, REQUEST_ID_HEADER};
use ketravelan::{configure, AppState};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ketravelan={},actix_web=info", level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn startup_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(startup_error)?;
    init_tracing(&config.app.log_level, config.app.log_json);
    config.validate().map_err(startup_error)?;

    tracing::info!("Starting Ketravelan trip finance service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        currency = %config.payments.currency,
        max_term_months = ?config.payments.max_term_months,
        "Payment defaults loaded"
    );

    let state = web::Data::new(AppState::new(config.payments.clone()));
    let allowed_origins = config.server.allowed_origins.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .allowed_header(ROLE_HEADER)
            .allowed_header(REQUEST_ID_HEADER)
            .expose_headers(vec![REQUEST_ID_HEADER])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(SessionContext)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
