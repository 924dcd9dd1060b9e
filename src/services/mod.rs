//! # 비즈니스 로직 서비스 계층
//!
//! ```text
//! handlers ──▶ auth::AuthService ─┬─▶ oauth::OAuthService ──▶ oauth::ProviderRegistry
//!                                 ├─▶ roles::RoleService  ──▶ repositories::roles
//!                                 └─▶ auth::TokenService
//! ```
//!
//! 서비스는 모두 `main`에서 한 번 조립되어 `web::Data`로 공유됩니다.
//! 요청 간에 변경되는 공유 상태는 없습니다.

pub mod oauth;
pub mod roles;
pub mod auth;
