//! # 요청 오케스트레이터
//!
//! 외부에 노출되는 네 가지 연산을 fail-fast 파이프라인으로 엮습니다.
//!
//! ```text
//! Authorize : provider → 동의 화면 URL
//! Login     : provider, Code → 토큰 교환 → 신원 조회(1회) → 이메일 → 고유 ID → 역할(자동 생성) → 토큰 서명
//! GetRoles  : id → 역할 조회
//! SetRoles  : ID, Roles → 덮어쓰기 → 재조회
//! ```
//!
//! 어떤 단계든 실패하면 나머지 단계는 실행되지 않으며, 내부 재시도는 없습니다.
//! 유일한 예외는 토큰 발급 뒤의 사용자 정보 갱신으로, 실패해도 로그만 남깁니다.

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::auth::{IssuedToken, OAuthCode};
use crate::domain::dto::roles::UserRoles;
use crate::domain::models::Identity;
use crate::errors::{AppError, AppResult};
use crate::services::oauth::OAuthService;
use crate::services::roles::RoleService;
use super::token_service::TokenService;
use super::user_info_service::UserInfoUpdater;

#[derive(Clone)]
pub struct AuthService {
    oauth: OAuthService,
    roles: RoleService,
    tokens: Arc<TokenService>,
    user_info: Arc<dyn UserInfoUpdater>,
}

impl AuthService {
    pub fn new(
        oauth: OAuthService,
        roles: RoleService,
        tokens: Arc<TokenService>,
        user_info: Arc<dyn UserInfoUpdater>,
    ) -> Self {
        Self { oauth, roles, tokens, user_info }
    }

    pub fn oauth(&self) -> &OAuthService {
        &self.oauth
    }

    pub fn authorize(&self, provider: Option<&str>) -> AppResult<String> {
        self.oauth.get_authorize_redirect(provider)
    }

    /// authorization code를 서명된 토큰으로 바꿉니다.
    pub async fn login(&self, payload: &OAuthCode, provider: Option<&str>) -> AppResult<IssuedToken> {
        // 알 수 없는 프로바이더는 어떤 외부 호출도 하기 전에 거부
        self.oauth.resolve(provider)?;
        payload.validate()?;

        let access_token = self.oauth.get_oauth_token(&payload.code, provider).await?;
        let identity = self.oauth.get_identity(&access_token, provider).await?;
        let email = OAuthService::email_of(&identity)?;
        let unique_id = OAuthService::unique_id_of(&identity)?;
        let roles = self.roles.get_user_roles(&unique_id, true).await?;
        let token = self.tokens.make_token(&unique_id, &email, &roles)?;

        log::info!("✅ 로그인 성공: {} ({:?})", unique_id, roles);

        let identity = Identity { unique_id, email };
        if let Err(e) = self.user_info.update_basic_info(&identity).await {
            log::warn!("사용자 정보 갱신 실패 ({}): {}", identity.unique_id, e);
        }

        Ok(IssuedToken { token })
    }

    pub async fn get_roles(&self, id: Option<&str>) -> AppResult<UserRoles> {
        let id = id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::MissingRequiredField("Must provide id parameter".to_string()))?;

        let roles = self.roles.get_user_roles(id, false).await?;
        Ok(UserRoles::new(id, roles))
    }

    /// 역할을 덮어쓴 뒤 저장된 상태를 다시 읽어 돌려줍니다.
    pub async fn set_roles(&self, payload: &UserRoles) -> AppResult<UserRoles> {
        payload.validate()?;

        self.roles.set_user_roles(&payload.id, &payload.roles).await?;
        let roles = self.roles.get_user_roles(&payload.id, false).await?;

        Ok(UserRoles::new(payload.id.clone(), roles))
    }
}
