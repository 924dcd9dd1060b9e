//! 역할 관리 요청/응답 DTO

pub mod roles_dto;

pub use roles_dto::*;
