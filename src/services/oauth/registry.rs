use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{GitHubOAuthConfig, GoogleOAuthConfig};
use crate::errors::{AppError, AppResult};
use super::github_provider::GitHubProvider;
use super::google_provider::GoogleProvider;
use super::provider::OAuthProvider;

/// 이름으로 조회하는 OAuth 프로바이더 레지스트리
///
/// 기동 시 한 번 구성되고 이후에는 읽기 전용입니다. 이름은 소문자로 정규화됩니다.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn OAuthProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Arc<dyn OAuthProvider>) {
        let name = provider.name().to_lowercase();
        log::info!("OAuth 프로바이더 등록: {}", name);
        self.providers.insert(name, provider);
    }

    pub fn with_provider(mut self, provider: Arc<dyn OAuthProvider>) -> Self {
        self.register(provider);
        self
    }

    /// 환경 변수에 자격 증명이 있는 프로바이더만 등록합니다.
    pub fn from_env() -> AppResult<Self> {
        let mut registry = Self::new();

        match GoogleOAuthConfig::load() {
            Some(config) => registry.register(Arc::new(GoogleProvider::new(config))),
            None => log::info!("Google 자격 증명 없음, 프로바이더 비활성"),
        }

        match GitHubOAuthConfig::load() {
            Some(config) => registry.register(Arc::new(GitHubProvider::new(config)?)),
            None => log::info!("GitHub 자격 증명 없음, 프로바이더 비활성"),
        }

        if registry.is_empty() {
            log::warn!("⚠️ 등록된 OAuth 프로바이더가 없습니다. 모든 로그인 요청이 거부됩니다");
        }

        Ok(registry)
    }

    /// 요청의 provider 파라미터를 프로바이더로 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnknownProvider` - 파라미터가 없거나 비었거나 등록되지 않은 이름
    pub fn resolve(&self, name: Option<&str>) -> AppResult<Arc<dyn OAuthProvider>> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::UnknownProvider("Must provide provider parameter".to_string()))?;

        self.providers
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| AppError::UnknownProvider(name.to_string()))
    }

    /// 등록된 프로바이더 이름 (정렬됨)
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
