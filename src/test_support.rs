//! 테스트 전용 가짜 구현과 조립 도우미

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::models::Identity;
use crate::errors::{AppError, AppResult};
use crate::repositories::roles::RoleRepository;
use crate::services::auth::{AuthService, NoopUserInfoUpdater, TokenService};
use crate::services::oauth::{OAuthProvider, OAuthService, ProviderRegistry};
use crate::services::roles::RoleService;

pub const TEST_SECRET: &str = "test-secret";

/// 응답을 미리 정해 둔 OAuth 프로바이더
pub struct FakeProvider {
    name: String,
    exchange: AppResult<String>,
    identity: AppResult<Identity>,
    exchange_calls: AtomicUsize,
    identity_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            exchange: Ok("T".to_string()),
            identity: Ok(Identity {
                unique_id: "u1".to_string(),
                email: "u@x.com".to_string(),
            }),
            exchange_calls: AtomicUsize::new(0),
            identity_calls: AtomicUsize::new(0),
        }
    }

    /// `test` 프로바이더: 코드 → `T`, 신원 → `u1` / `u@x.com`
    pub fn happy_path() -> Self {
        Self::named("test")
    }

    pub fn with_exchange(mut self, result: AppResult<String>) -> Self {
        self.exchange = result;
        self
    }

    pub fn with_identity(mut self, result: AppResult<Identity>) -> Self {
        self.identity = result;
        self
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OAuthProvider for FakeProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn authorize_redirect_url(&self) -> String {
        "https://provider.test/authorize?client_id=test-client".to_string()
    }

    async fn exchange_code(&self, _code: &str) -> AppResult<String> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        self.exchange.clone()
    }

    async fn fetch_identity(&self, _access_token: &str) -> AppResult<Identity> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        self.identity.clone()
    }
}

/// 호출 횟수를 세는 메모리 역할 저장소
#[derive(Default)]
pub struct CountingRoleRepository {
    records: Mutex<HashMap<String, Vec<String>>>,
    calls: AtomicUsize,
    created: AtomicUsize,
    failing: bool,
}

impl CountingRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(id: &str, roles: Vec<String>) -> Self {
        let repo = Self::new();
        repo.records.lock().unwrap().insert(id.to_string(), roles);
        repo
    }

    /// 모든 호출이 `RoleLookupFailed`로 실패하는 저장소
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn stored(&self, id: &str) -> Option<Vec<String>> {
        self.records.lock().unwrap().get(id).cloned()
    }

    fn enter(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(AppError::RoleLookupFailed("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for CountingRoleRepository {
    async fn find_roles(&self, id: &str) -> AppResult<Option<Vec<String>>> {
        self.enter()?;
        Ok(self.stored(id))
    }

    async fn find_or_create(&self, id: &str, default_roles: &[String]) -> AppResult<Vec<String>> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        let roles = records.entry(id.to_string()).or_insert_with(|| {
            self.created.fetch_add(1, Ordering::SeqCst);
            default_roles.to_vec()
        });
        Ok(roles.clone())
    }

    async fn replace_roles(&self, id: &str, roles: &[String]) -> AppResult<bool> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        match records.get_mut(id) {
            Some(existing) => {
                *existing = roles.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub fn token_service() -> TokenService {
    TokenService::new_hs256(TEST_SECRET, "api-auth", 1)
}

/// 가짜 프로바이더와 저장소로 오케스트레이터를 조립합니다. 기본 역할은 `["user"]`.
pub fn auth_service(provider: Arc<FakeProvider>, repo: Arc<CountingRoleRepository>) -> AuthService {
    let registry = ProviderRegistry::new().with_provider(provider);

    AuthService::new(
        OAuthService::new(Arc::new(registry)),
        RoleService::new(repo, vec!["user".to_string()]),
        Arc::new(token_service()),
        Arc::new(NoopUserInfoUpdater),
    )
}
