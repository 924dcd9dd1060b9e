use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use super::role_repo::RoleRepository;

/// 프로세스 메모리 역할 저장소
///
/// 조회와 생성이 하나의 잠금 안에서 일어나므로 `find_or_create`는 ID당 정확히 한 번만 생성합니다.
/// 재시작하면 데이터가 사라지므로 로컬 개발과 테스트용입니다.
#[derive(Default)]
pub struct MemoryRoleRepository {
    records: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 레코드를 가진 저장소를 만듭니다.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            records: Mutex::new(records.into_iter().collect()),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, Vec<String>>>> {
        self.records
            .lock()
            .map_err(|_| AppError::RoleLookupFailed("역할 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn find_or_insert(&self, id: &str, default_roles: &[String]) -> AppResult<Vec<String>> {
        let mut records = self.lock()?;

        Ok(records
            .entry(id.to_string())
            .or_insert_with(|| default_roles.to_vec())
            .clone())
    }
}

#[async_trait]
impl RoleRepository for MemoryRoleRepository {
    async fn find_roles(&self, id: &str) -> AppResult<Option<Vec<String>>> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn find_or_create(&self, id: &str, default_roles: &[String]) -> AppResult<Vec<String>> {
        self.find_or_insert(id, default_roles)
    }

    async fn replace_roles(&self, id: &str, roles: &[String]) -> AppResult<bool> {
        let mut records = self.lock()?;

        match records.get_mut(id) {
            Some(existing) => {
                *existing = roles.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
