//! # Domain Entities Module
//!
//! 저장소에 직접 기록되는 영속 엔티티입니다.
//! 이 서비스가 소유하는 영속 상태는 사용자별 역할 레코드 하나뿐입니다.

pub mod roles;

pub use roles::*;
