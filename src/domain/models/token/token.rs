//! JWT 클레임 구조체
//!
//! 발급 시점의 신원과 역할 스냅샷을 담습니다. 이후 역할이 바뀌어도
//! 이미 발급된 토큰은 만료될 때까지 그대로 유효합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `id`: 사용자 고유 ID (프로바이더 접두사 포함)
/// - `email`: 프로바이더에서 확인한 이메일
/// - `roles`: 발급 시점의 역할 목록
/// - `iss`: 발급자
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 식별자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}
