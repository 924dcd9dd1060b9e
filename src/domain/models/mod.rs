//! # Domain Models Module
//!
//! 저장되지 않는 값 객체들입니다.
//!
//! - [`identity`] - 프로바이더에서 확인한 사용자 신원
//! - [`token`] - 서명 대상 JWT 클레임

pub mod identity;
pub mod token;

pub use identity::*;
pub use token::*;
