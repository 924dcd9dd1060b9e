//! # HTTP Request Handlers Module
//!
//! 핸들러는 요청을 추출하고 [`AuthService`](crate::services::auth::AuthService)에 위임한 뒤
//! 결과를 JSON으로 돌려주는 일만 합니다. 실패는 `?`로 전파되고
//! `AppError`의 `ResponseError` 구현이 응답을 만듭니다.
//!
//! ```text
//! Client ──HTTP──▶ handlers ──▶ AuthService ──▶ OAuth / RoleStore / Token
//!                     ▲                             │
//!                     └──── Result<_, AppError> ◀───┘
//! ```
//!
//! - [`auth`] - 동의 화면 리다이렉트, 코드 로그인
//! - [`roles`] - 역할 조회/덮어쓰기

pub mod auth;
pub mod roles;
