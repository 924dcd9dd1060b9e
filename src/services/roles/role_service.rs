use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::repositories::roles::RoleRepository;

/// 역할 저장소 게이트웨이
///
/// 저장소 백엔드 위에서 조회/자동 생성/덮어쓰기 규칙을 적용합니다.
/// 자체적으로 잠금을 잡지 않으며 ID 단위 원자성은 백엔드에 위임합니다.
#[derive(Clone)]
pub struct RoleService {
    repo: Arc<dyn RoleRepository>,
    default_roles: Vec<String>,
}

impl RoleService {
    pub fn new(repo: Arc<dyn RoleRepository>, default_roles: Vec<String>) -> Self {
        Self {
            repo,
            default_roles: normalize_roles(&default_roles),
        }
    }

    /// 사용자 역할을 조회합니다.
    ///
    /// `create_if_missing`이 참이면 첫 로그인 사용자에게 기본 역할 레코드를 만들어 돌려주고,
    /// 거짓이면 레코드가 없을 때 `RoleNotFound`로 실패합니다.
    pub async fn get_user_roles(&self, id: &str, create_if_missing: bool) -> AppResult<Vec<String>> {
        if create_if_missing {
            return self.repo.find_or_create(id, &self.default_roles).await;
        }

        self.repo
            .find_roles(id)
            .await?
            .ok_or_else(|| AppError::RoleNotFound(id.to_string()))
    }

    /// 기존 레코드의 역할을 통째로 덮어씁니다 (병합하지 않음).
    pub async fn set_user_roles(&self, id: &str, roles: &[String]) -> AppResult<()> {
        let roles = normalize_roles(roles);

        if !self.repo.replace_roles(id, &roles).await? {
            return Err(AppError::RoleNotFound(id.to_string()));
        }

        log::info!("역할 갱신 완료: {} → {:?}", id, roles);
        Ok(())
    }
}

/// 처음 나온 순서를 유지한 중복 제거
///
/// 값 자체는 바꾸지 않으므로 저장한 역할 문자열이 그대로 조회됩니다.
pub fn normalize_roles(roles: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();

    roles
        .iter()
        .filter(|role| seen.insert(role.as_str()))
        .cloned()
        .collect()
}
