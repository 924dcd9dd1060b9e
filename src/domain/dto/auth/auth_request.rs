use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /code/` 요청 본문
///
/// 프로바이더 동의 화면이 발급한 일회용 authorization code를 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OAuthCode {
    #[serde(rename = "Code", default)]
    #[validate(length(min = 1, message = "Must provide oauth code"))]
    pub code: String,
}

/// `GET /`, `POST /code/` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderQuery {
    pub provider: Option<String>,
}

/// 로그인 성공 응답: 서명된 bearer 토큰
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedToken {
    #[serde(rename = "Token")]
    pub token: String,
}
