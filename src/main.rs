use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use announcement_service::{
    constants::{DEFAULT_LOG_FILTER, START_TIME},
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::stop_on_signal,
    repositories::sqlx_repo::{SqlxAnnouncementRepo, SqlxTeacherRepo},
    routes::configure_routes,
    settings::AppConfig,
    web::cors::build_cors,
    AppState,
};
use once_cell::sync::Lazy;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    Lazy::force(&START_TIME);

    let config = AppConfig::new()?;
    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url, config.database_max_connections).await?;

    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    let app_state = web::Data::new(AppState::new(pool));
    let cors_origins = config.cors_origins();
    let server_addr = config.server_addr();

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&cors_origins))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes::<SqlxAnnouncementRepo, SqlxTeacherRepo>)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(&server_addr)?
    .run();

    tokio::spawn(stop_on_signal(server.handle()));

    server.await?;
    Ok(())
}
