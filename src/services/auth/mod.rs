//! 인증 서비스 모듈
//!
//! - [`token_service`] - JWT 서명/검증
//! - [`user_info_service`] - 로그인 후 사용자 정보 갱신 확장 지점
//! - [`auth_service`] - 네 가지 연산을 엮는 요청 오케스트레이터

pub mod token_service;
pub mod user_info_service;
pub mod auth_service;

pub use token_service::*;
pub use user_info_service::*;
pub use auth_service::*;
