//! OAuth 프로바이더 계층
//!
//! - [`provider`] - 프로바이더 능력 트레이트
//! - [`google_provider`], [`github_provider`] - 구체 프로바이더
//! - [`registry`] - 이름 → 프로바이더 매핑
//! - [`oauth_service`] - 리다이렉트/코드 교환/신원 조회 오케스트레이션

pub mod provider;
pub mod google_provider;
pub mod github_provider;
pub mod registry;
pub mod oauth_service;

pub use provider::*;
pub use google_provider::*;
pub use github_provider::*;
pub use registry::*;
pub use oauth_service::*;
