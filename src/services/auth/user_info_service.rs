use async_trait::async_trait;

use crate::domain::models::Identity;
use crate::errors::AppResult;

/// 로그인 직후 사용자 프로필 서비스에 기본 정보를 알리는 확장 지점
///
/// 토큰 발급 이후에 호출되며, 실패해도 로그인은 성공으로 끝납니다.
#[async_trait]
pub trait UserInfoUpdater: Send + Sync {
    async fn update_basic_info(&self, identity: &Identity) -> AppResult<()>;
}

/// 아무것도 하지 않는 기본 구현
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUserInfoUpdater;

#[async_trait]
impl UserInfoUpdater for NoopUserInfoUpdater {
    async fn update_basic_info(&self, identity: &Identity) -> AppResult<()> {
        log::debug!("사용자 정보 갱신 생략: {}", identity.unique_id);
        Ok(())
    }
}
