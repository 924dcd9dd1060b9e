//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 관리합니다.
//! 각 설정 구조체는 필요한 시점에 `std::env`를 읽는 정적 접근자를 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 역할 저장소, CORS 설정
//! - [`auth_config`] - OAuth 프로바이더, JWT, 기본 역할 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 실행 환경 (미설정 시 production)
//! export ENVIRONMENT="development"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 토큰 서명
//! export JWT_ALGORITHM="HS256"          # 또는 RS256
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="168"
//!
//! # 역할 저장소
//! export ROLE_STORE="mongodb"           # 또는 memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export REDIS_URL="redis://localhost:6379"   # 선택, 역할 캐시
//! export DEFAULT_ROLES="user"
//!
//! # OAuth 프로바이더 (설정된 것만 등록)
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export GOOGLE_REDIRECT_URI="https://yourdomain.com/auth/callback"
//! export GITHUB_CLIENT_ID="..."
//! export GITHUB_CLIENT_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
