use serde::{Deserialize, Serialize};

/// 프로바이더에서 확인한 사용자 신원
///
/// `unique_id`는 역할 저장소와 토큰 클레임 전체에서 쓰이는 영구 키이며,
/// 같은 사용자는 로그인할 때마다 같은 값을 가져야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub unique_id: String,
    pub email: String,
}

impl Identity {
    /// 프로바이더 이름과 계정 ID를 이어 붙여 전역 고유 ID를 만듭니다.
    ///
    /// 서로 다른 프로바이더의 계정 번호가 겹쳐도 ID가 충돌하지 않습니다.
    /// 예: `github` + `1234567` → `github1234567`
    pub fn from_provider(provider: &str, account_id: &str, email: String) -> Self {
        Self {
            unique_id: format!("{}{}", provider, account_id),
            email,
        }
    }
}
