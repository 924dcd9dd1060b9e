//! # GitHub OAuth 프로바이더
//!
//! GitHub 토큰 엔드포인트는 실패해도 200과 함께 `error` 필드를 돌려주는 경우가 있어
//! 응답 본문을 확인해야 합니다. 이메일을 비공개로 설정한 사용자는 `/user` 응답의
//! `email`이 `null`이므로 `/user/emails`에서 기본(primary) 검증 주소를 찾습니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::OAuthClientConfig;
use crate::domain::models::Identity;
use crate::errors::{AppError, AppResult};
use super::provider::{OAuthProvider, build_authorize_url};

const USER_AGENT: &str = concat!("api_auth_service/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GitHubTokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubUser {
    id: Option<u64>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubEmail {
    email: String,
    primary: bool,
    verified: bool,
}

pub struct GitHubProvider {
    config: OAuthClientConfig,
    http: reqwest::Client,
}

impl GitHubProvider {
    pub fn new(config: OAuthClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("GitHub HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { config, http })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_uri.trim_end_matches('/'), path)
    }

    async fn get_json<T>(&self, url: &str, access_token: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| AppError::IdentityFetchFailed(format!("GitHub API 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::IdentityFetchFailed(format!(
                "GitHub API 응답 오류 ({}): {}", status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::IdentityFetchFailed(format!("GitHub API 응답 파싱 실패: {}", e)))
    }

    async fn primary_verified_email(&self, access_token: &str) -> AppResult<Option<String>> {
        let emails: Vec<GitHubEmail> = self
            .get_json(&self.api_url("/user/emails"), access_token)
            .await?;

        Ok(emails
            .into_iter()
            .find(|e| e.primary && e.verified)
            .map(|e| e.email))
    }
}

#[async_trait]
impl OAuthProvider for GitHubProvider {
    fn name(&self) -> &str {
        "github"
    }

    fn authorize_redirect_url(&self) -> String {
        let mut params = vec![("client_id", self.config.client_id.clone())];

        if let Some(redirect_uri) = &self.config.redirect_uri {
            params.push(("redirect_uri", redirect_uri.clone()));
        }

        params.push(("scope", self.config.scopes.join(" ")));

        build_authorize_url(&self.config.auth_uri, &params)
    }

    async fn exchange_code(&self, code: &str) -> AppResult<String> {
        let mut params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
        ];

        if let Some(redirect_uri) = &self.config.redirect_uri {
            params.push(("redirect_uri", redirect_uri.as_str()));
        }

        let response = self
            .http
            .post(&self.config.token_uri)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::CodeExchangeFailed(format!("GitHub 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::CodeExchangeFailed(format!(
                "GitHub 토큰 교환 실패 ({}): {}", status, error_text
            )));
        }

        let token = response
            .json::<GitHubTokenResponse>()
            .await
            .map_err(|e| AppError::CodeExchangeFailed(format!("GitHub 토큰 응답 파싱 실패: {}", e)))?;

        if let Some(error) = token.error {
            return Err(AppError::CodeExchangeFailed(format!(
                "GitHub 토큰 교환 거부: {} {}",
                error,
                token.error_description.unwrap_or_default()
            )));
        }

        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::CodeExchangeFailed("GitHub 응답에 access_token이 없습니다".to_string()))
    }

    async fn fetch_identity(&self, access_token: &str) -> AppResult<Identity> {
        let user: GitHubUser = self.get_json(&self.api_url("/user"), access_token).await?;

        let id = user
            .id
            .ok_or_else(|| AppError::IdentityFetchFailed("GitHub 프로필에 id가 없습니다".to_string()))?;

        let email = match user.email.filter(|e| !e.is_empty()) {
            Some(email) => email,
            None => {
                log::debug!("GitHub 공개 이메일 없음, /user/emails 조회: {}", id);
                self.primary_verified_email(access_token)
                    .await?
                    .ok_or_else(|| {
                        AppError::IdentityFetchFailed("GitHub 계정에 검증된 기본 이메일이 없습니다".to_string())
                    })?
            }
        };

        Ok(Identity::from_provider(self.name(), &id.to_string(), email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base: &str) -> OAuthClientConfig {
        OAuthClientConfig {
            client_id: "gh-client".to_string(),
            client_secret: "gh-secret".to_string(),
            redirect_uri: None,
            scopes: vec!["user:email".to_string()],
            auth_uri: format!("{}/login/oauth/authorize", base),
            token_uri: format!("{}/login/oauth/access_token", base),
            api_uri: base.to_string(),
        }
    }

    fn provider(base: &str) -> GitHubProvider {
        GitHubProvider::new(config(base)).unwrap()
    }

    #[test]
    fn test_authorize_url_without_redirect_uri() {
        let url = provider("https://github.com").authorize_redirect_url();

        assert_eq!(
            url,
            "https://github.com/login/oauth/authorize?client_id=gh-client&scope=user%3Aemail"
        );
    }

    #[actix_web::test]
    async fn test_exchange_code_returns_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "gho_abc",
                "token_type": "bearer",
                "scope": "user:email"
            })))
            .mount(&server)
            .await;

        assert_eq!(provider(&server.uri()).exchange_code("abc123").await.unwrap(), "gho_abc");
    }

    #[actix_web::test]
    async fn test_exchange_code_error_in_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "bad_verification_code",
                "error_description": "The code passed is incorrect or expired."
            })))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).exchange_code("stale").await.unwrap_err();

        assert!(matches!(err, AppError::CodeExchangeFailed(msg) if msg.contains("bad_verification_code")));
    }

    #[actix_web::test]
    async fn test_fetch_identity_with_public_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer gho_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1234567,
                "login": "octocat",
                "email": "octo@x.com"
            })))
            .mount(&server)
            .await;

        let identity = provider(&server.uri()).fetch_identity("gho_abc").await.unwrap();

        assert_eq!(identity.unique_id, "github1234567");
        assert_eq!(identity.email, "octo@x.com");
    }

    #[actix_web::test]
    async fn test_fetch_identity_falls_back_to_primary_verified_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 42,
                "login": "private",
                "email": null
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "email": "old@x.com", "primary": false, "verified": true },
                { "email": "unverified@x.com", "primary": true, "verified": false },
                { "email": "main@x.com", "primary": true, "verified": true }
            ])))
            .mount(&server)
            .await;

        let identity = provider(&server.uri()).fetch_identity("gho_abc").await.unwrap();

        assert_eq!(identity.unique_id, "github42");
        assert_eq!(identity.email, "main@x.com");
    }

    #[actix_web::test]
    async fn test_fetch_identity_without_usable_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 42, "email": null })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).fetch_identity("gho_abc").await.unwrap_err();

        assert_eq!(err.kind(), "IDENTITY_FETCH_FAILED");
    }

    #[actix_web::test]
    async fn test_fetch_identity_rejected_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })))
            .mount(&server)
            .await;

        let err = provider(&server.uri()).fetch_identity("revoked").await.unwrap_err();

        assert!(matches!(err, AppError::IdentityFetchFailed(msg) if msg.contains("401")));
    }
}
