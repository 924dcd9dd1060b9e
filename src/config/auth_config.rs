//! 인증, OAuth 프로바이더, JWT, 기본 역할 설정
//!
//! OAuth 프로바이더는 `*_CLIENT_ID`와 `*_CLIENT_SECRET`이 모두 설정된 경우에만 등록됩니다.
//! 엔드포인트 URI는 테스트나 프록시 환경을 위해 환경 변수로 덮어쓸 수 있습니다.

use std::env;

use super::data_config::parse_list;

/// 하나의 OAuth 클라이언트 등록 정보
#[derive(Debug, Clone)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    /// 동의 화면 이후 돌아갈 주소. GitHub는 생략 시 앱 등록값을 사용합니다.
    pub redirect_uri: Option<String>,
    pub scopes: Vec<String>,
    /// 동의 화면 URL
    pub auth_uri: String,
    /// 토큰 교환 엔드포인트
    pub token_uri: String,
    /// 사용자 정보 엔드포인트 (Google) 또는 API 베이스 URL (GitHub)
    pub api_uri: String,
}

/// `PREFIX_CLIENT_ID` / `PREFIX_CLIENT_SECRET` 쌍을 읽습니다.
fn client_credentials(prefix: &str) -> Option<(String, String)> {
    let client_id = env::var(format!("{}_CLIENT_ID", prefix)).ok()?;
    let client_secret = env::var(format!("{}_CLIENT_SECRET", prefix)).ok()?;

    if client_id.trim().is_empty() || client_secret.trim().is_empty() {
        return None;
    }

    Some((client_id, client_secret))
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn load() -> Option<OAuthClientConfig> {
        let (client_id, client_secret) = client_credentials("GOOGLE")?;

        let redirect_uri = env::var("GOOGLE_REDIRECT_URI").ok();
        if redirect_uri.is_none() {
            log::warn!("GOOGLE_REDIRECT_URI not set, Google will reject authorize requests");
        }

        Some(OAuthClientConfig {
            client_id,
            client_secret,
            redirect_uri,
            scopes: vec!["openid".to_string(), "email".to_string(), "profile".to_string()],
            auth_uri: env_or("GOOGLE_AUTH_URI", "https://accounts.google.com/o/oauth2/v2/auth"),
            token_uri: env_or("GOOGLE_TOKEN_URI", "https://oauth2.googleapis.com/token"),
            api_uri: env_or("GOOGLE_USERINFO_URI", "https://www.googleapis.com/oauth2/v2/userinfo"),
        })
    }
}

pub struct GitHubOAuthConfig;

impl GitHubOAuthConfig {
    pub fn load() -> Option<OAuthClientConfig> {
        let (client_id, client_secret) = client_credentials("GITHUB")?;

        Some(OAuthClientConfig {
            client_id,
            client_secret,
            redirect_uri: env::var("GITHUB_REDIRECT_URI").ok(),
            scopes: vec!["user:email".to_string()],
            auth_uri: env_or("GITHUB_AUTH_URI", "https://github.com/login/oauth/authorize"),
            token_uri: env_or("GITHUB_TOKEN_URI", "https://github.com/login/oauth/access_token"),
            api_uri: env_or("GITHUB_API_URI", "https://api.github.com"),
        })
    }
}

/// 토큰 서명 알고리즘
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SigningAlgorithm {
    /// 공유 시크릿 HMAC-SHA256
    Hs256,
    /// RSA 개인키 서명, 검증은 공개키
    Rs256,
}

impl SigningAlgorithm {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_uppercase().as_str() {
            "HS256" => Ok(SigningAlgorithm::Hs256),
            "RS256" => Ok(SigningAlgorithm::Rs256),
            other => Err(format!("Unsupported JWT algorithm: {}", other)),
        }
    }
}

/// 토큰 유효 시간 상한 (10년)
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

pub struct JwtConfig;

impl JwtConfig {
    pub fn algorithm() -> Result<SigningAlgorithm, String> {
        SigningAlgorithm::from_str(&env_or("JWT_ALGORITHM", "HS256"))
    }

    pub fn secret() -> Option<String> {
        env::var("JWT_SECRET").ok().filter(|s| !s.is_empty())
    }

    pub fn private_key_path() -> String {
        env_or("JWT_PRIVATE_KEY_PATH", "./secrets/jwt_private_key.pem")
    }

    pub fn public_key_path() -> String {
        env_or("JWT_PUBLIC_KEY_PATH", "./secrets/jwt_public_key.pem")
    }

    /// 토큰 유효 시간. 범위를 벗어나거나 숫자가 아니면 기동 시점에 실패합니다.
    pub fn expiration_hours() -> Result<i64, String> {
        parse_expiration_hours(env::var("JWT_EXPIRATION_HOURS").ok().as_deref())
    }

    pub fn issuer() -> String {
        env_or("JWT_ISSUER", "api-auth")
    }
}

pub struct RoleConfig;

impl RoleConfig {
    /// 처음 로그인한 사용자에게 부여할 역할 목록
    pub fn default_roles() -> Vec<String> {
        parse_default_roles(env::var("DEFAULT_ROLES").ok().as_deref())
    }
}

/// 미설정 시 168시간 (7일), 허용 범위는 1..=[`MAX_EXPIRATION_HOURS`]
pub fn parse_expiration_hours(value: Option<&str>) -> Result<i64, String> {
    let Some(raw) = value else {
        return Ok(168);
    };

    let hours: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("JWT_EXPIRATION_HOURS is not a number: {}", raw))?;

    if !(1..=MAX_EXPIRATION_HOURS).contains(&hours) {
        return Err(format!(
            "JWT_EXPIRATION_HOURS must be between 1 and {}: {}",
            MAX_EXPIRATION_HOURS, hours
        ));
    }

    Ok(hours)
}

/// 목록이 비어 있으면 `user` 하나로 대체합니다.
pub fn parse_default_roles(value: Option<&str>) -> Vec<String> {
    let roles = value.map(parse_list).unwrap_or_default();

    if roles.is_empty() {
        vec!["user".to_string()]
    } else {
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_algorithm_from_string() {
        assert_eq!(SigningAlgorithm::from_str("HS256").unwrap(), SigningAlgorithm::Hs256);
        assert_eq!(SigningAlgorithm::from_str("rs256").unwrap(), SigningAlgorithm::Rs256);
        assert!(SigningAlgorithm::from_str("none").is_err());
    }

    #[test]
    fn test_default_roles_fall_back_to_user() {
        assert_eq!(parse_default_roles(None), vec!["user"]);
        assert_eq!(parse_default_roles(Some(" , ")), vec!["user"]);
        assert_eq!(parse_default_roles(Some("viewer, editor")), vec!["viewer", "editor"]);
    }

    #[test]
    fn test_jwt_expiration_default() {
        assert_eq!(parse_expiration_hours(None), Ok(168));
        assert_eq!(parse_expiration_hours(Some("24")), Ok(24));
    }

    #[test]
    fn test_jwt_expiration_out_of_range_rejected() {
        assert!(parse_expiration_hours(Some("0")).is_err());
        assert!(parse_expiration_hours(Some("-1")).is_err());
        assert!(parse_expiration_hours(Some("9223372036854775")).is_err());
        assert!(parse_expiration_hours(Some("soon")).is_err());
        assert_eq!(parse_expiration_hours(Some("87600")), Ok(MAX_EXPIRATION_HOURS));
    }
}
