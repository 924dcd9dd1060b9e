//! API 인증 서비스 메인 애플리케이션
//!
//! 설정을 읽고 OAuth 프로바이더, 역할 저장소, 토큰 서명기를 조립한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{self, TrailingSlash};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use api_auth_service::caching::redis::RedisClient;
use api_auth_service::config::{CorsConfig, RoleConfig, RoleStoreBackend, ServerConfig, StorageConfig};
use api_auth_service::db::Database;
use api_auth_service::errors::{AppError, AppResult};
use api_auth_service::repositories::roles::{MemoryRoleRepository, MongoRoleRepository, RoleCache, RoleRepository};
use api_auth_service::routes::configure_all_routes;
use api_auth_service::services::auth::{AuthService, NoopUserInfoUpdater, TokenService};
use api_auth_service::services::oauth::{OAuthService, ProviderRegistry};
use api_auth_service::services::roles::RoleService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("환경 파일 로드 실패, 프로세스 환경 변수만 사용: {}", e),
    }

    info!("🚀 API 인증 서비스 시작중...");

    let auth_service = match build_auth_service().await {
        Ok(service) => service,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(auth_service)).await
}

/// 프로바이더 레지스트리, 역할 저장소, 토큰 서명기를 조립합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - 잘못된 설정, 저장소 연결 실패, 키 로딩 실패
async fn build_auth_service() -> AppResult<AuthService> {
    let registry = ProviderRegistry::from_env()?;
    info!("🔐 활성 OAuth 프로바이더: {:?}", registry.names());

    let repo = initialize_role_store().await?;
    let tokens = TokenService::from_config()?;
    let default_roles = RoleConfig::default_roles();
    info!("👤 기본 역할: {:?}", default_roles);

    Ok(AuthService::new(
        OAuthService::new(Arc::new(registry)),
        RoleService::new(repo, default_roles),
        Arc::new(tokens),
        Arc::new(NoopUserInfoUpdater),
    ))
}

/// `ROLE_STORE` 설정에 따라 역할 저장소를 준비합니다
///
/// MongoDB 백엔드는 `REDIS_URL`이 있으면 Redis 읽기 캐시를 붙입니다.
/// Redis 연결에 실패하면 캐시 없이 계속 진행합니다.
async fn initialize_role_store() -> AppResult<Arc<dyn RoleRepository>> {
    match StorageConfig::backend().map_err(AppError::ConfigError)? {
        RoleStoreBackend::Memory => {
            warn!("⚠️ 메모리 역할 저장소 사용: 재시작하면 역할 데이터가 사라집니다");
            Ok(Arc::new(MemoryRoleRepository::new()))
        }
        RoleStoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect()
                .await
                .map_err(|e| AppError::ConfigError(format!("MongoDB 연결 실패: {}", e)))?;

            let cache = match StorageConfig::redis_url() {
                Some(url) => match RedisClient::connect(&url).await {
                    Ok(client) => Some(RoleCache::new(
                        Arc::new(client),
                        StorageConfig::role_cache_ttl_seconds(),
                    )),
                    Err(e) => {
                        warn!("⚠️ Redis 연결 실패, 역할 캐시 없이 진행: {}", e);
                        None
                    }
                },
                None => None,
            };

            Ok(Arc::new(MongoRoleRepository::new(
                &database,
                &StorageConfig::roles_collection(),
                cache,
            )))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(auth_service: web::Data<AuthService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::new(TrailingSlash::Always))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
fn configure_cors() -> Cors {
    let cors = CorsConfig::allowed_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
