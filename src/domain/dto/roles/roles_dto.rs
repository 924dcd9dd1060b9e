use serde::{Deserialize, Serialize};
use validator::Validate;

/// 사용자 ID와 역할 집합
///
/// `PUT /roles/` 요청 본문이자 `GET /roles/`, `PUT /roles/` 응답 본문입니다.
/// 역할 순서는 의미가 없지만 저장된 순서 그대로 왕복합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserRoles {
    #[serde(rename = "ID", default)]
    #[validate(length(min = 1, message = "Must provide id parameter"))]
    pub id: String,

    #[serde(rename = "Roles", default)]
    pub roles: Vec<String>,
}

impl UserRoles {
    pub fn new(id: impl Into<String>, roles: Vec<String>) -> Self {
        Self { id: id.into(), roles }
    }
}

/// `GET /roles/` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesQuery {
    pub id: Option<String>,
}
