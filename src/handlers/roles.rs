//! 역할 관리 HTTP 핸들러
//!
//! - `GET /roles/?id=github42` - 저장된 역할 조회 (레코드를 만들지 않음)
//! - `PUT /roles/` - `{"ID": "...", "Roles": [...]}`로 역할 덮어쓰기

use actix_web::{HttpResponse, get, put, web};

use crate::domain::dto::roles::{RolesQuery, UserRoles};
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// # Endpoint
/// `GET /roles/?id={id}`
#[get("/roles/")]
pub async fn get_roles(
    auth: web::Data<AuthService>,
    query: web::Query<RolesQuery>,
) -> Result<HttpResponse, AppError> {
    let roles = auth.get_roles(query.id.as_deref()).await?;

    Ok(HttpResponse::Ok().json(roles))
}

/// 저장 후 재조회한 역할을 응답합니다.
///
/// # Endpoint
/// `PUT /roles/`
///
/// ```bash
/// curl -X PUT http://localhost:8080/roles/ \
///   -H "Content-Type: application/json" \
///   -d '{"ID":"github42","Roles":["user","admin"]}'
/// ```
#[put("/roles/")]
pub async fn set_roles(
    auth: web::Data<AuthService>,
    payload: web::Json<UserRoles>,
) -> Result<HttpResponse, AppError> {
    let roles = auth.set_roles(&payload).await?;

    Ok(HttpResponse::Ok().json(roles))
}
