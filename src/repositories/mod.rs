//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 이 서비스가 소유하는 영속 데이터는 사용자별 역할 레코드뿐입니다.
//! 서비스 계층은 `Arc<dyn RoleRepository>`로만 저장소에 접근하므로
//! 백엔드는 기동 시 설정(`ROLE_STORE`)으로 선택됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::roles::{MemoryRoleRepository, RoleRepository};
//!
//! let repo: Arc<dyn RoleRepository> = Arc::new(MemoryRoleRepository::new());
//! let roles = repo.find_or_create("github42", &["user".to_string()]).await?;
//! ```

pub mod roles;
