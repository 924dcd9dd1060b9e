use std::sync::Arc;

use crate::domain::models::Identity;
use crate::errors::{AppError, AppResult};
use super::provider::OAuthProvider;
use super::registry::ProviderRegistry;

/// 프로바이더에 독립적인 OAuth 오케스트레이션
///
/// 모든 연산은 호출마다 프로바이더를 새로 해석하므로 어떤 단계가 실패했는지
/// 호출자가 정확히 구분할 수 있습니다.
#[derive(Clone)]
pub struct OAuthService {
    registry: Arc<ProviderRegistry>,
}

impl OAuthService {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn resolve(&self, provider: Option<&str>) -> AppResult<Arc<dyn OAuthProvider>> {
        self.registry.resolve(provider)
    }

    /// 프로바이더 동의 화면 URL
    pub fn get_authorize_redirect(&self, provider: Option<&str>) -> AppResult<String> {
        Ok(self.resolve(provider)?.authorize_redirect_url())
    }

    /// authorization code → 프로바이더 액세스 토큰
    pub async fn get_oauth_token(&self, code: &str, provider: Option<&str>) -> AppResult<String> {
        self.resolve(provider)?.exchange_code(code).await
    }

    /// 액세스 토큰으로 프로바이더 신원을 한 번 조회합니다.
    ///
    /// 로그인처럼 이메일과 고유 ID가 모두 필요한 호출자는 이 결과를
    /// [`email_of`](Self::email_of), [`unique_id_of`](Self::unique_id_of)로 나눠 검증합니다.
    pub async fn get_identity(&self, access_token: &str, provider: Option<&str>) -> AppResult<Identity> {
        self.resolve(provider)?.fetch_identity(access_token).await
    }

    pub async fn get_email(&self, access_token: &str, provider: Option<&str>) -> AppResult<String> {
        Self::email_of(&self.get_identity(access_token, provider).await?)
    }

    pub async fn get_unique_id(&self, access_token: &str, provider: Option<&str>) -> AppResult<String> {
        Self::unique_id_of(&self.get_identity(access_token, provider).await?)
    }

    pub fn email_of(identity: &Identity) -> AppResult<String> {
        if identity.email.is_empty() {
            return Err(AppError::IdentityFetchFailed("Provider returned empty email".to_string()));
        }

        Ok(identity.email.clone())
    }

    pub fn unique_id_of(identity: &Identity) -> AppResult<String> {
        if identity.unique_id.is_empty() {
            return Err(AppError::IdentityFetchFailed("Provider returned empty unique id".to_string()));
        }

        Ok(identity.unique_id.clone())
    }
}
