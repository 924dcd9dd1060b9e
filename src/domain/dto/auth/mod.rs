//! 로그인 관련 요청/응답 DTO

pub mod auth_request;

pub use auth_request::*;
