//! # Domain Layer
//!
//! ```text
//! Domain Layer
//! ├── entities/   ← 영속 엔티티 (역할 레코드)
//! ├── models/     ← 값 객체 (신원, 토큰 클레임)
//! └── dto/        ← HTTP 페이로드
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::roles::RoleRecord;
pub use dto::auth::{IssuedToken, OAuthCode, ProviderQuery};
pub use dto::roles::{RolesQuery, UserRoles};
pub use models::{Identity, TokenClaims};
