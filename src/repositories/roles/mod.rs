//! 역할 저장소 모듈
//!
//! [`RoleRepository`](role_repo::RoleRepository) 계약과 두 가지 백엔드를 제공합니다.
//!
//! - [`MongoRoleRepository`](mongo_role_repo::MongoRoleRepository) - MongoDB + 선택적 Redis 읽기 캐시
//! - [`MemoryRoleRepository`](memory_role_repo::MemoryRoleRepository) - 프로세스 메모리

pub mod role_repo;
pub mod mongo_role_repo;
pub mod memory_role_repo;

pub use role_repo::*;
pub use mongo_role_repo::*;
pub use memory_role_repo::*;
