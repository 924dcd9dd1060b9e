//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 JSON 캐시입니다. 역할 저장소가 읽기 캐시로 사용하며,
//! `REDIS_URL`이 없으면 캐시 없이 동작합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379
//! ```

pub mod redis;
