use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_cms::{
    background_task::start_maintenance_task,
    build_cors,
    db::{migrations::run_migrations, sqlite::create_pool},
    graceful_shutdown::shutdown_signal,
    middlewares::auth::AuthMiddleware,
    routes::{configure_routes, not_found},
    settings::AppConfig,
    AppState,
};

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    if config.is_production() {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to create database connection pool")?;

    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to apply database migrations")?;

    let app_state = web::Data::new(AppState::new(&config, pool.clone()));

    if let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) {
        app_state
            .auth_handler
            .seed_admin(username, password)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to seed admin user")?;
    }

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Portfolio API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_state = app_state.clone();
    let server_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_state.clone())
            .configure(configure_routes)
            .default_service(web::route().to(not_found))
            .wrap(AuthMiddleware)
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&server_config))
            .wrap(TracingLogger::default())
    })
    .workers(config.worker_count.max(1))
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    let maintenance = tokio::spawn(start_maintenance_task(app_state.clone()));

    let result = tokio::select! {
        res = server => res.context("Server error"),
        _ = shutdown_signal() => Ok(()),
    };

    maintenance.abort();
    pool.close().await;
    tracing::info!("Portfolio API stopped");

    result
}
