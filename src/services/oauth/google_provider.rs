//! # Google OAuth 2.0 프로바이더
//!
//! Authorization Code Flow의 세 단계를 구현합니다.
//!
//! ```text
//! 1. GET  accounts.google.com/o/oauth2/v2/auth   ← 동의 화면 리다이렉트
//! 2. POST oauth2.googleapis.com/token            ← code → access_token
//! 3. GET  www.googleapis.com/oauth2/v2/userinfo  ← access_token → id, email
//! ```

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::OAuthClientConfig;
use crate::domain::models::Identity;
use crate::errors::{AppError, AppResult};
use super::provider::{OAuthProvider, build_authorize_url};

#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    access_token: String,
}

/// `oauth2/v2/userinfo` 응답 중 필요한 필드
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    id: Option<String>,
    email: Option<String>,
}

pub struct GoogleProvider {
    config: OAuthClientConfig,
    http: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(config: OAuthClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OAuthProvider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn authorize_redirect_url(&self) -> String {
        let mut params = vec![("client_id", self.config.client_id.clone())];

        if let Some(redirect_uri) = &self.config.redirect_uri {
            params.push(("redirect_uri", redirect_uri.clone()));
        }

        params.push(("scope", self.config.scopes.join(" ")));
        params.push(("response_type", "code".to_string()));

        build_authorize_url(&self.config.auth_uri, &params)
    }

    async fn exchange_code(&self, code: &str) -> AppResult<String> {
        let mut params = vec![
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "authorization_code"),
        ];

        if let Some(redirect_uri) = &self.config.redirect_uri {
            params.push(("redirect_uri", redirect_uri.as_str()));
        }

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::CodeExchangeFailed(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::CodeExchangeFailed(format!(
                "Google 토큰 교환 실패 ({}): {}", status, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map(|token| token.access_token)
            .map_err(|e| AppError::CodeExchangeFailed(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    async fn fetch_identity(&self, access_token: &str) -> AppResult<Identity> {
        let response = self
            .http
            .get(&self.config.api_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::IdentityFetchFailed(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::IdentityFetchFailed(format!(
                "Google 사용자 정보 조회 실패 ({}): {}", status, error_text
            )));
        }

        let user = response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::IdentityFetchFailed(format!("Google 사용자 정보 파싱 실패: {}", e)))?;

        let id = user
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::IdentityFetchFailed("Google 프로필에 id가 없습니다".to_string()))?;
        let email = user
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AppError::IdentityFetchFailed("Google 프로필에 email이 없습니다".to_string()))?;

        Ok(Identity::from_provider(self.name(), &id, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base: &str) -> OAuthClientConfig {
        OAuthClientConfig {
            client_id: "google-client".to_string(),
            client_secret: "google-secret".to_string(),
            redirect_uri: Some("http://localhost:3000/auth/callback".to_string()),
            scopes: vec!["openid".to_string(), "email".to_string(), "profile".to_string()],
            auth_uri: format!("{}/auth", base),
            token_uri: format!("{}/token", base),
            api_uri: format!("{}/userinfo", base),
        }
    }

    #[test]
    fn test_authorize_url_contains_client_and_scopes() {
        let provider = GoogleProvider::new(config("https://accounts.example.com"));
        let url = provider.authorize_redirect_url();

        assert!(url.starts_with("https://accounts.example.com/auth?"));
        assert!(url.contains("client_id=google-client"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("response_type=code"));
        assert!(!url.contains("google-secret"));
    }

    #[actix_web::test]
    async fn test_exchange_code_returns_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("code=abc123"))
            .and(body_string_contains("grant_type=authorization_code"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.token",
                "token_type": "Bearer",
                "expires_in": 3599
            })))
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(config(&server.uri()));
        assert_eq!(provider.exchange_code("abc123").await.unwrap(), "ya29.token");
    }

    #[actix_web::test]
    async fn test_exchange_code_rejected_by_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Bad Request"
            })))
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(config(&server.uri()));
        let err = provider.exchange_code("used-code").await.unwrap_err();

        assert!(matches!(err, AppError::CodeExchangeFailed(msg) if msg.contains("invalid_grant")));
    }

    #[actix_web::test]
    async fn test_exchange_code_unreachable_provider() {
        let provider = GoogleProvider::new(config("http://127.0.0.1:1"));
        let err = provider.exchange_code("abc123").await.unwrap_err();

        assert_eq!(err.kind(), "CODE_EXCHANGE_FAILED");
    }

    #[actix_web::test]
    async fn test_fetch_identity_prefixes_provider() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .and(header("authorization", "Bearer ya29.token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "108923",
                "email": "u@x.com",
                "verified_email": true,
                "name": "U"
            })))
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(config(&server.uri()));
        let identity = provider.fetch_identity("ya29.token").await.unwrap();

        assert_eq!(identity, Identity {
            unique_id: "google108923".to_string(),
            email: "u@x.com".to_string(),
        });
    }

    #[actix_web::test]
    async fn test_fetch_identity_incomplete_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "108923" })))
            .mount(&server)
            .await;

        let provider = GoogleProvider::new(config(&server.uri()));
        let err = provider.fetch_identity("ya29.token").await.unwrap_err();

        assert_eq!(err.kind(), "IDENTITY_FETCH_FAILED");
    }
}
