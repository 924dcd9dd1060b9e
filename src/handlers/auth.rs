//! OAuth 로그인 HTTP 핸들러
//!
//! - `GET /?provider=github` - 프로바이더 동의 화면으로 302 리다이렉트
//! - `POST /code/?provider=github` - `{"Code": "..."}` → `{"Token": "..."}`

use actix_web::{HttpResponse, get, http::header, post, web};

use crate::domain::dto::auth::{OAuthCode, ProviderQuery};
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 프로바이더 동의 화면으로 리다이렉트
///
/// # Endpoint
/// `GET /?provider={provider}`
#[get("/")]
pub async fn authorize(
    auth: web::Data<AuthService>,
    query: web::Query<ProviderQuery>,
) -> Result<HttpResponse, AppError> {
    let location = auth.authorize(query.provider.as_deref())?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish())
}

/// authorization code로 로그인하고 서명된 토큰을 발급
///
/// # Endpoint
/// `POST /code/?provider={provider}`
///
/// ```bash
/// curl -X POST "http://localhost:8080/code/?provider=github" \
///   -H "Content-Type: application/json" \
///   -d '{"Code":"abc123"}'
/// ```
#[post("/code/")]
pub async fn login(
    auth: web::Data<AuthService>,
    query: web::Query<ProviderQuery>,
    payload: web::Json<OAuthCode>,
) -> Result<HttpResponse, AppError> {
    let issued = auth.login(&payload, query.provider.as_deref()).await?;

    Ok(HttpResponse::Ok().json(issued))
}
