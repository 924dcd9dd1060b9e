//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 페이로드 정의입니다.
//! 필드 이름은 기존 클라이언트와의 호환을 위해 `Code`, `Token`, `ID`, `Roles`처럼
//! 대문자로 직렬화됩니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `GET /` | `?provider=` | 302 redirect |
//! | `POST /code/` | `?provider=`, [`OAuthCode`] | [`IssuedToken`] |
//! | `GET /roles/` | `?id=` | [`UserRoles`] |
//! | `PUT /roles/` | [`UserRoles`] | [`UserRoles`] |

pub mod auth;
pub mod roles;

pub use auth::*;
pub use roles::*;
