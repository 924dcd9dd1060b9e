use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 역할 저장소의 영속 레코드 (MongoDB 문서)
///
/// 사용자 고유 ID를 `_id`로 사용하므로 같은 ID의 레코드는 하나만 존재할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub roles: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
