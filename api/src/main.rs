use actix_web::{web, HttpServer};
use log::info;
use std::sync::Arc;

use lf_api::app::create_app;
use lf_api::routes::auth::AppState;

use lf_core::services::auth::AuthService;
use lf_core::services::correlation::{CorrelationConfig, CorrelationService};
use lf_core::services::token::{JwtCodec, TokenConfig, TokenService};
use lf_infra::cache::{RedisClient, RedisTokenStore};
use lf_infra::database::InMemoryUserRepository;
use lf_infra::queue::RedisMailQueue;
use lf_infra::security::BcryptPasswordHasher;
use lf_shared::config::{CacheConfig, Environment, JwtConfig, QueueConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Learnify API server");

    // Load configuration
    let environment = Environment::from_env();
    let server_config = ServerConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let cache_config = CacheConfig::from_env();
    let queue_config = QueueConfig::from_env();

    if environment.is_production() && jwt_config.is_using_default_secret() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "JWT_SECRET must be set in production",
        ));
    }

    // Shared Redis client backing the token store and the mail streams
    let redis_client = RedisClient::new(cache_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let token_store = Arc::new(RedisTokenStore::new(redis_client.clone()));
    let mail_queue = Arc::new(RedisMailQueue::new(redis_client, queue_config));
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let password_hasher = Arc::new(BcryptPasswordHasher::default());

    // Wire the services
    let token_service = Arc::new(TokenService::new(
        Arc::clone(&token_store),
        TokenConfig::from_jwt_config(&jwt_config),
    ));
    let correlation_service = Arc::new(CorrelationService::new(
        Arc::clone(&token_store),
        mail_queue,
        CorrelationConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&token_service),
        correlation_service,
        password_hasher,
    ));
    let jwt_codec = Arc::new(JwtCodec::new(&jwt_config.secret));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
        jwt_codec,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
