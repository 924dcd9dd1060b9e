use async_trait::async_trait;

use crate::errors::AppResult;

/// 사용자 ID → 역할 집합 저장소 계약
///
/// 원자성은 백엔드가 보장합니다. 특히 `find_or_create`는 같은 ID로 동시에 호출되어도
/// 레코드를 한 번만 만들어야 하며, 모든 호출자는 실제로 저장된 역할을 돌려받습니다.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// 저장된 역할을 조회합니다. 레코드가 없으면 `None`.
    async fn find_roles(&self, id: &str) -> AppResult<Option<Vec<String>>>;

    /// 레코드가 없으면 `default_roles`로 원자적으로 만들고, 저장된 역할을 반환합니다.
    async fn find_or_create(&self, id: &str, default_roles: &[String]) -> AppResult<Vec<String>>;

    /// 기존 레코드의 역할을 통째로 덮어씁니다. 대상 레코드가 없었으면 `false`.
    async fn replace_roles(&self, id: &str, roles: &[String]) -> AppResult<bool>;
}
