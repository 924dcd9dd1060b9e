use std::sync::Arc;

use async_trait::async_trait;
use redis::RedisError;
use mongodb::{
    Collection,
    bson::{DateTime, doc},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};

use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::entities::roles::RoleRecord,
    errors::{AppError, AppResult},
};
use super::role_repo::RoleRepository;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 역할 캐시 저장소 계약
///
/// 운영에서는 [`RedisClient`]가 구현하고, 테스트에서는 메모리 구현으로 대체합니다.
#[async_trait]
pub trait RoleCacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, RedisError>;

    /// 무조건 덮어씁니다.
    async fn set(&self, key: &str, roles: &[String], ttl_seconds: u64) -> Result<(), RedisError>;

    /// 키가 없을 때만 저장합니다. 저장했으면 `true`.
    async fn set_if_absent(&self, key: &str, roles: &[String], ttl_seconds: u64) -> Result<bool, RedisError>;

    async fn del(&self, key: &str) -> Result<(), RedisError>;
}

#[async_trait]
impl RoleCacheStore for RedisClient {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, RedisError> {
        RedisClient::get::<Vec<String>>(self, key).await
    }

    async fn set(&self, key: &str, roles: &[String], ttl_seconds: u64) -> Result<(), RedisError> {
        self.set_with_expiry(key, &roles, ttl_seconds).await
    }

    async fn set_if_absent(&self, key: &str, roles: &[String], ttl_seconds: u64) -> Result<bool, RedisError> {
        self.set_nx_with_expiry(key, &roles, ttl_seconds).await
    }

    async fn del(&self, key: &str) -> Result<(), RedisError> {
        RedisClient::del(self, key).await
    }
}

/// Redis 역할 캐시
///
/// 쓰기 경로(`refresh`)만 값을 덮어씁니다. 읽기 경로의 채우기(`fill`)는 키가 없을 때만
/// 저장하므로, 늦게 도착한 조회 결과가 더 최신의 write-through 값을 가리지 않습니다.
#[derive(Clone)]
pub struct RoleCache {
    store: Arc<dyn RoleCacheStore>,
    ttl_seconds: u64,
}

impl RoleCache {
    pub fn new(store: Arc<dyn RoleCacheStore>, ttl_seconds: u64) -> Self {
        Self { store, ttl_seconds }
    }

    fn key(id: &str) -> String {
        format!("roles:{}", id)
    }

    /// 캐시 장애는 조회 실패로 취급하지 않고 DB로 넘어갑니다.
    async fn get(&self, id: &str) -> Option<Vec<String>> {
        match self.store.get(&Self::key(id)).await {
            Ok(roles) => roles,
            Err(e) => {
                log::debug!("역할 캐시 조회 실패 ({}): {}", id, e);
                None
            }
        }
    }

    /// DB에서 읽은 값을 캐시에 채웁니다. 이미 값이 있으면 건드리지 않습니다.
    async fn fill(&self, id: &str, roles: &[String]) {
        match self.store.set_if_absent(&Self::key(id), roles, self.ttl_seconds).await {
            Ok(true) => {}
            Ok(false) => log::debug!("역할 캐시에 더 최신 값 존재, 채우기 생략: {}", id),
            Err(e) => log::debug!("역할 캐시 저장 실패 ({}): {}", id, e),
        }
    }

    /// 새 역할로 덮어쓰고, 실패하면 키를 지워 오래된 값이 남지 않게 합니다.
    async fn refresh(&self, id: &str, roles: &[String]) {
        if let Err(e) = self.store.set(&Self::key(id), roles, self.ttl_seconds).await {
            log::warn!("역할 캐시 갱신 실패 ({}), 키 삭제 시도: {}", id, e);
            if let Err(e) = self.store.del(&Self::key(id)).await {
                log::error!("역할 캐시 무효화 실패 ({}): {}", id, e);
            }
        }
    }
}

/// MongoDB 기반 역할 저장소
///
/// 사용자 ID를 `_id`로 쓰기 때문에 동일 ID 레코드의 중복 생성은 서버가 막아 줍니다.
pub struct MongoRoleRepository {
    collection: Collection<RoleRecord>,
    cache: Option<RoleCache>,
}

impl MongoRoleRepository {
    pub fn new(db: &Database, collection_name: &str, cache: Option<RoleCache>) -> Self {
        Self {
            collection: db.collection::<RoleRecord>(collection_name),
            cache,
        }
    }

    async fn load(&self, id: &str) -> AppResult<Option<RoleRecord>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::RoleLookupFailed(format!("역할 조회 실패 ({}): {}", id, e)))
    }

    async fn cache_fill(&self, id: &str, roles: &[String]) {
        if let Some(cache) = &self.cache {
            cache.fill(id, roles).await;
        }
    }
}

/// findAndModify upsert 경쟁에서 진 쪽이 받는 중복 키 에러인지 확인합니다.
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[async_trait]
impl RoleRepository for MongoRoleRepository {
    async fn find_roles(&self, id: &str) -> AppResult<Option<Vec<String>>> {
        if let Some(cache) = &self.cache {
            if let Some(roles) = cache.get(id).await {
                return Ok(Some(roles));
            }
        }

        let roles = self.load(id).await?.map(|record| record.roles);

        if let Some(roles) = &roles {
            self.cache_fill(id, roles).await;
        }

        Ok(roles)
    }

    async fn find_or_create(&self, id: &str, default_roles: &[String]) -> AppResult<Vec<String>> {
        if let Some(cache) = &self.cache {
            if let Some(roles) = cache.get(id).await {
                return Ok(roles);
            }
        }

        let now = DateTime::now();
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let upserted = self
            .collection
            .find_one_and_update(
                doc! { "_id": id },
                doc! {
                    "$setOnInsert": {
                        "roles": default_roles.to_vec(),
                        "created_at": now,
                        "updated_at": now,
                    }
                },
            )
            .with_options(options)
            .await;

        let record = match upserted {
            Ok(record) => record,
            Err(e) if is_duplicate_key(&e) => {
                log::debug!("동시 역할 생성 감지, 기존 레코드 재조회: {}", id);
                self.load(id).await?
            }
            Err(e) => {
                return Err(AppError::RoleWriteFailed(format!("역할 생성 실패 ({}): {}", id, e)));
            }
        };

        let record = record.ok_or_else(|| {
            AppError::RoleWriteFailed(format!("역할 레코드를 만들지 못했습니다: {}", id))
        })?;

        self.cache_fill(id, &record.roles).await;

        Ok(record.roles)
    }

    async fn replace_roles(&self, id: &str, roles: &[String]) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "roles": roles.to_vec(),
                        "updated_at": DateTime::now(),
                    }
                },
            )
            .await
            .map_err(|e| AppError::RoleWriteFailed(format!("역할 변경 실패 ({}): {}", id, e)))?;

        if result.matched_count == 0 {
            return Ok(false);
        }

        if let Some(cache) = &self.cache {
            cache.refresh(id, roles).await;
        }

        Ok(true)
    }
}
