//! OAuth 프로바이더 능력 계약

use async_trait::async_trait;

use crate::domain::models::Identity;
use crate::errors::AppResult;

/// 하나의 OAuth 프로바이더가 제공하는 세 가지 동작
///
/// 각 호출은 재시도 없이 한 번만 시도합니다. 재시도 정책이 필요하다면
/// 구현체의 HTTP 전송 계층에서 처리합니다.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// 레지스트리 키이자 고유 ID 접두사 (예: `google`, `github`)
    fn name(&self) -> &str;

    /// 동의 화면 URL (클라이언트 ID, 스코프, 리다이렉트 URI 포함)
    fn authorize_redirect_url(&self) -> String;

    /// authorization code를 프로바이더 액세스 토큰으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::CodeExchangeFailed` - 잘못된/만료된/재사용된 코드, 네트워크 실패, 2xx가 아닌 응답
    async fn exchange_code(&self, code: &str) -> AppResult<String>;

    /// 액세스 토큰으로 사용자 신원(고유 ID, 이메일)을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::IdentityFetchFailed` - ID나 이메일이 없는 프로필, 프로바이더 접근 불가
    async fn fetch_identity(&self, access_token: &str) -> AppResult<Identity>;
}

/// 쿼리 파라미터를 URL 인코딩하여 기본 URL 뒤에 붙입니다.
pub fn build_authorize_url(base: &str, params: &[(&str, String)]) -> String {
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if base.contains('?') { '&' } else { '?' };

    format!("{}{}{}", base, separator, query_string)
}
