use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use portfolio_api::{
    AppState,
    db::sqlite::{create_pool, run_migrations},
    routes::configure_routes,
    settings::AppConfig,
};
use tokio::signal;
use tracing::warn;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to apply database migrations");

    let app_state = web::Data::new(AppState::new(&config, pool));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let workers = config.worker_count;
    let cors_config = config.clone();
    let api_prefix = config.api_prefix.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_config))
            .configure(|cfg| configure_routes(cfg, &api_prefix))
    })
    .workers(workers)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}

fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);
    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to listen for SIGTERM");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("🛑 Ctrl+C received, initiating shutdown...")
        },
        _ = terminate => {
            warn!("🛑 SIGTERM received, initiating shutdown...");
        }
    }
}
