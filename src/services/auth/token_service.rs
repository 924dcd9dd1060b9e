//! JWT 토큰 발급 서비스
//!
//! 신원(고유 ID, 이메일)과 발급 시점의 역할을 하나의 서명된 토큰으로 묶습니다.
//! 서버에는 아무것도 저장하지 않으며, 역할이 바뀌어도 이미 발급된 토큰은 만료까지 유효합니다.
//!
//! # 서명 알고리즘
//!
//! | `JWT_ALGORITHM` | 키 |
//! |-----------------|----|
//! | `HS256` (기본) | `JWT_SECRET` |
//! | `RS256` | `JWT_PRIVATE_KEY_PATH`, `JWT_PUBLIC_KEY_PATH` (PEM) |
//!
//! 키는 기동 시 한 번만 읽습니다. 키를 읽지 못하면 서버가 뜨지 않습니다.
//!
//! # RSA 키 생성
//!
//! ```bash
//! openssl genrsa -out jwt_private_key.pem 2048
//! openssl rsa -in jwt_private_key.pem -pubout -out jwt_public_key.pem
//! ```

use std::fs;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::{Environment, JwtConfig, SigningAlgorithm};
use crate::domain::models::TokenClaims;
use crate::errors::{AppError, AppResult};

const RSA_KEY_ID: &str = "api-auth-key-1";
const DEV_FALLBACK_SECRET: &str = "dev-only-insecure-jwt-secret";

pub struct TokenService {
    algorithm: Algorithm,
    key_id: Option<String>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiration_hours: i64,
}

impl TokenService {
    /// 환경 변수 설정으로 서비스를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 지원하지 않는 알고리즘, 범위를 벗어난 만료 시간,
    ///   운영 환경의 `JWT_SECRET` 누락, 읽을 수 없거나 형식이 잘못된 RSA 키 파일
    pub fn from_config() -> AppResult<Self> {
        let issuer = JwtConfig::issuer();
        let expiration_hours = JwtConfig::expiration_hours().map_err(AppError::ConfigError)?;

        match JwtConfig::algorithm().map_err(AppError::ConfigError)? {
            SigningAlgorithm::Hs256 => {
                let secret = match JwtConfig::secret() {
                    Some(secret) => secret,
                    None if Environment::current().is_production() => {
                        return Err(AppError::ConfigError(
                            "JWT_SECRET must be set in production".to_string(),
                        ));
                    }
                    None => {
                        log::warn!("⚠️ JWT_SECRET 미설정, 개발용 기본 시크릿 사용");
                        DEV_FALLBACK_SECRET.to_string()
                    }
                };

                log::info!("🔑 JWT 서명: HS256");
                Ok(Self::new_hs256(&secret, issuer, expiration_hours))
            }
            SigningAlgorithm::Rs256 => {
                let private_key_path = JwtConfig::private_key_path();
                let public_key_path = JwtConfig::public_key_path();

                let private_pem = fs::read(&private_key_path).map_err(|e| {
                    AppError::ConfigError(format!("Failed to read private key '{}': {}", private_key_path, e))
                })?;
                let public_pem = fs::read(&public_key_path).map_err(|e| {
                    AppError::ConfigError(format!("Failed to read public key '{}': {}", public_key_path, e))
                })?;

                log::info!("🔑 JWT 서명: RS256 ({})", private_key_path);
                Self::new_rs256(&private_pem, &public_pem, issuer, expiration_hours)
            }
        }
    }

    pub fn new_hs256(secret: &str, issuer: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            key_id: None,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            expiration_hours,
        }
    }

    pub fn new_rs256(
        private_pem: &[u8],
        public_pem: &[u8],
        issuer: impl Into<String>,
        expiration_hours: i64,
    ) -> AppResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(private_pem)
            .map_err(|e| AppError::ConfigError(format!("Invalid RSA private key: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_pem)
            .map_err(|e| AppError::ConfigError(format!("Invalid RSA public key: {}", e)))?;

        Ok(Self {
            algorithm: Algorithm::RS256,
            key_id: Some(RSA_KEY_ID.to_string()),
            encoding_key,
            decoding_key,
            issuer: issuer.into(),
            expiration_hours,
        })
    }

    /// 신원과 역할 스냅샷을 서명된 토큰으로 만듭니다.
    pub fn make_token(&self, id: &str, email: &str, roles: &[String]) -> AppResult<String> {
        let now = Utc::now();
        let exp = TimeDelta::try_hours(self.expiration_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::SigningFailure(format!(
                    "Token expiry out of range: {} hours",
                    self.expiration_hours
                ))
            })?;

        let claims = TokenClaims {
            id: id.to_string(),
            email: email.to_string(),
            roles: roles.to_vec(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let mut header = Header::new(self.algorithm);
        header.kid = self.key_id.clone();

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| AppError::SigningFailure(format!("Failed to sign token: {}", e)))
    }

    /// 서명, 발급자, 만료를 검증하고 클레임을 돌려줍니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::MalformedRequest(format!("Invalid token: {}", e)))
    }
}
