//! 서버, 실행 환경, 저장소 관련 설정
//!
//! 모든 값은 환경 변수에서 읽습니다. 파싱 규칙은 `parse_*` 함수로 분리되어 있어
//! 환경 변수 없이도 검증할 수 있습니다.

use std::env;

/// 실행 환경 구분
///
/// 운영 환경에서는 안전하지 않은 기본값(JWT 시크릿 등)을 허용하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT`가 없으면 운영 환경으로 간주합니다.
    pub fn current() -> Self {
        Self::from_env_value(env::var("ENVIRONMENT").ok().as_deref())
    }

    pub fn from_env_value(value: Option<&str>) -> Self {
        value.map(Self::from_str).unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production | Environment::Staging)
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_port(env::var("PORT").ok().as_deref())
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        parse_workers(env::var("HTTP_WORKERS").ok().as_deref())
    }
}

pub fn parse_port(value: Option<&str>) -> u16 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(8080)
}

/// 0 이하이거나 숫자가 아니면 기본값 4
pub fn parse_workers(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|n: &usize| *n > 0)
        .unwrap_or(4)
}

/// 역할 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoleStoreBackend {
    /// MongoDB 컬렉션 (+ 선택적 Redis 읽기 캐시)
    MongoDb,
    /// 프로세스 메모리 (재시작 시 소실, 로컬 개발용)
    Memory,
}

impl RoleStoreBackend {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(RoleStoreBackend::MongoDb),
            "memory" | "in-memory" => Ok(RoleStoreBackend::Memory),
            other => Err(format!("Unsupported role store backend: {}", other)),
        }
    }
}

pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> Result<RoleStoreBackend, String> {
        RoleStoreBackend::from_str(
            &env::var("ROLE_STORE").unwrap_or_else(|_| "mongodb".to_string()),
        )
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "api_auth".to_string())
    }

    pub fn roles_collection() -> String {
        env::var("ROLES_COLLECTION").unwrap_or_else(|_| "user_roles".to_string())
    }

    /// 설정되어 있을 때만 Redis 역할 캐시를 사용합니다.
    pub fn redis_url() -> Option<String> {
        env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())
    }

    pub fn role_cache_ttl_seconds() -> u64 {
        env::var("ROLE_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600)
    }
}

pub struct CorsConfig;

impl CorsConfig {
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => parse_list(&raw),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

/// 쉼표로 구분된 목록을 공백 제거 후 파싱합니다. 빈 항목은 버립니다.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_missing_environment_counts_as_production() {
        assert_eq!(Environment::from_env_value(None), Environment::Production);
        assert!(Environment::from_env_value(None).is_production());
        assert_eq!(Environment::from_env_value(Some("development")), Environment::Development);
    }

    #[test]
    fn test_production_like_environments() {
        assert!(Environment::Production.is_production());
        assert!(Environment::Staging.is_production());
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Test.is_production());
    }

    #[test]
    fn test_role_store_backend_from_string() {
        assert_eq!(RoleStoreBackend::from_str("mongodb").unwrap(), RoleStoreBackend::MongoDb);
        assert_eq!(RoleStoreBackend::from_str(" Memory ").unwrap(), RoleStoreBackend::Memory);
        assert!(RoleStoreBackend::from_str("postgres").is_err());
    }

    #[test]
    fn test_parse_list_skips_blank_entries() {
        assert_eq!(parse_list("user, admin,,  "), vec!["user", "admin"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_port_parsing() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("9090")), 9090);
        assert_eq!(parse_port(Some("not-a-port")), 8080);
        assert_eq!(parse_port(Some("70000")), 8080);
    }

    #[test]
    fn test_workers_parsing() {
        assert_eq!(parse_workers(None), 4);
        assert_eq!(parse_workers(Some("8")), 8);
        assert_eq!(parse_workers(Some("0")), 4);
        assert_eq!(parse_workers(Some("-2")), 4);
    }
}
