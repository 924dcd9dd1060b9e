//! API 인증 서비스 백엔드
//!
//! OAuth authorization code를 역할이 담긴 서명된 토큰으로 바꾸고,
//! 관리자를 위한 작은 역할 관리 API를 제공합니다.
//!
//! # Features
//!
//! - **다중 프로바이더 OAuth**: Google, GitHub (자격 증명이 설정된 것만 활성화)
//! - **역할 자동 생성**: 첫 로그인 사용자에게 기본 역할 레코드를 원자적으로 생성
//! - **JWT 발급**: HS256 또는 RS256, 신원과 역할 스냅샷을 담은 상태 없는 토큰
//! - **역할 저장소**: MongoDB (+ 선택적 Redis 읽기 캐시) 또는 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Handlers     │  ← HTTP 엔드포인트 (/, /code/, /roles/)
//! ├─────────────────┤
//! │    Services     │  ← AuthService → OAuthService / RoleService / TokenService
//! ├─────────────────┤
//! │  Repositories   │  ← RoleRepository (MongoDB, Memory)
//! ├─────────────────┤
//! │  Data Layer     │  ← MongoDB, Redis
//! └─────────────────┘
//! ```
//!
//! # Error Handling
//!
//! 모든 실패는 [`errors::AppError`]로 표현되며 `ResponseError` 구현 한 곳에서
//! `{"error": {"kind", "message"}}` 응답으로 변환됩니다.

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub(crate) mod test_support;
