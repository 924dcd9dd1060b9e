//! API 라우트 설정 모듈
//!
//! | Method | Path | 핸들러 |
//! |--------|------|--------|
//! | GET | `/` | [`handlers::auth::authorize`] |
//! | POST | `/code/` | [`handlers::auth::login`] |
//! | GET | `/roles/` | [`handlers::roles::get_roles`] |
//! | PUT | `/roles/` | [`handlers::roles::set_roles`] |
//! | GET | `/health/` | [`health_check`] |
//!
//! 모든 경로는 끝에 `/`가 붙은 형태로 등록됩니다. `main`에서 `NormalizePath`로
//! `/roles`와 `/roles/`를 같은 경로로 맞춥니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(auth_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpRequest, HttpResponse, error, web};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::services::auth::AuthService;

/// 모든 라우트와 추출기 설정을 등록합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check);

    configure_auth_routes(cfg);
    configure_role_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::authorize)
        .service(handlers::auth::login);
}

fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::roles::get_roles)
        .service(handlers::roles::set_roles);
}

/// 본문 역직렬화 실패도 동일한 에러 봉투로 응답
///
/// `Content-Type` 헤더가 없거나 달라도 본문을 JSON으로 해석합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            AppError::MalformedRequest(err.to_string()).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        AppError::MalformedRequest(err.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "api_auth_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "providers": ["github", "google"]
/// }
/// ```
#[actix_web::get("/health/")]
async fn health_check(auth: web::Data<AuthService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "providers": auth.oauth().registry().names(),
    }))
}
