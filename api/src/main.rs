use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use fleet_api::{create_app, AppState};
use fleet_core::repositories::{CarRepository, TokenRepository};
use fleet_core::services::{
    CarService, JwtTokenMinter, TokenCleanupConfig, TokenCleanupService, TokenService,
    TokenServiceConfig, TokioExpiryScheduler,
};
use fleet_infra::database::{ensure_schema, DatabasePool};
use fleet_infra::{
    InMemoryCarRepository, InMemoryTokenRepository, MySqlCarRepository, MySqlTokenRepository,
};
use fleet_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config);

    if let Err(message) = config.validate() {
        error!("Invalid configuration: {}", message);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, message));
    }

    info!(environment = %config.environment, "Starting Fleet API Server");

    if config.database.is_in_memory() {
        info!("Using in-memory document store");
        serve(
            config,
            Arc::new(InMemoryTokenRepository::new()),
            Arc::new(InMemoryCarRepository::new()),
        )
        .await
    } else {
        let pool = DatabasePool::new(&config.database)
            .await
            .map_err(to_io_error)?;
        ensure_schema(pool.get_pool()).await.map_err(to_io_error)?;
        info!("{}", pool.get_statistics());

        let tokens = Arc::new(MySqlTokenRepository::new(pool.get_pool().clone()));
        let cars = Arc::new(MySqlCarRepository::new(pool.get_pool().clone()));
        let result = serve(config, tokens, cars).await;

        pool.close().await;
        result
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Wire the services over the chosen stores and run the HTTP server
async fn serve<T, C>(config: AppConfig, tokens: Arc<T>, cars: Arc<C>) -> io::Result<()>
where
    T: TokenRepository + 'static,
    C: CarRepository + 'static,
{
    let token_config = TokenServiceConfig::from(&config.auth);
    let minter = JwtTokenMinter::from_config(&token_config).map_err(to_io_error)?;
    info!(algorithm = ?minter.algorithm(), "Token minter ready");

    let scheduler = TokioExpiryScheduler::new(tokens.clone());
    let token_service = Arc::new(TokenService::new(
        tokens.clone(),
        Arc::new(minter),
        Arc::new(scheduler),
        token_config,
    ));
    let car_service = Arc::new(CarService::new(cars));

    Arc::new(TokenCleanupService::new(
        tokens,
        TokenCleanupConfig::from(&config.auth),
    ))
    .start_background_task();

    let app_state = web::Data::new(AppState::new(token_service, car_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server =
        HttpServer::new(move || create_app(app_state.clone()).wrap(TracingLogger::default()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}

fn to_io_error<E: std::fmt::Display>(error: E) -> io::Error {
    error!("Startup failed: {}", error);
    io::Error::new(io::ErrorKind::Other, error.to_string())
}
