//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 로그인 파이프라인의 각 단계가 실패할 수 있는 지점을 하나의 태그형 열거형으로 표현합니다.
//! `thiserror`로 메시지를 만들고, `actix_web::ResponseError` 구현이 HTTP 응답으로
//! 변환되는 유일한 경계입니다. 핸들러는 `?`로 에러를 전파하기만 합니다.
//!
//! ## 상태 코드 매핑
//!
//! | AppError | kind | HTTP Status |
//! |----------|------|-------------|
//! | `UnknownProvider` | `UNKNOWN_PROVIDER` | 422 |
//! | `CodeExchangeFailed` | `CODE_EXCHANGE_FAILED` | 422 |
//! | `IdentityFetchFailed` | `IDENTITY_FETCH_FAILED` | 422 |
//! | `RoleNotFound` | `ROLE_NOT_FOUND` | 422 |
//! | `RoleWriteFailed` | `ROLE_WRITE_FAILED` | 422 |
//! | `RoleLookupFailed` | `ROLE_LOOKUP_FAILED` | 422 |
//! | `SigningFailure` | `SIGNING_FAILURE` | 422 |
//! | `MissingRequiredField` | `MISSING_REQUIRED_FIELD` | 422 |
//! | `MalformedRequest` | `MALFORMED_REQUEST` | 422 |
//! | `ConfigError` | `CONFIG_ERROR` | 500 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": {
//!     "kind": "UNKNOWN_PROVIDER",
//!     "message": "Unknown provider: twitter"
//!   }
//! }
//! ```

use actix_web::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 경로에서 발생하는 모든 실패는 이 열거형 중 하나로 표현되며,
/// 원래 메시지를 그대로 보존하여 클라이언트에게 전달합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// provider 파라미터가 없거나 등록되지 않은 프로바이더
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// OAuth 코드가 유효하지 않거나 만료/재사용되었거나, 토큰 교환 중 프로바이더에 접근 불가
    #[error("Code exchange failed: {0}")]
    CodeExchangeFailed(String),

    /// 프로바이더 프로필이 불완전하거나 사용자 정보 조회 중 접근 불가
    #[error("Identity fetch failed: {0}")]
    IdentityFetchFailed(String),

    /// 생성 없이 조회한 ID에 역할 레코드가 없음
    #[error("Role record not found: {0}")]
    RoleNotFound(String),

    /// 저장소가 역할 변경을 거부했거나 영구 반영하지 못함
    #[error("Role write failed: {0}")]
    RoleWriteFailed(String),

    /// 저장소에서 역할을 읽을 수 없음 (연결 실패, 손상된 레코드 등)
    #[error("Role lookup failed: {0}")]
    RoleLookupFailed(String),

    /// 서명된 토큰을 만들 수 없음 (키/설정 문제)
    #[error("Token signing failed: {0}")]
    SigningFailure(String),

    /// 필수 파라미터(`id`, `ID`, `Code`) 누락
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// 요청 본문이나 쿼리 스트링을 해석할 수 없음
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// 기동 시 설정 로드 실패 (요청 경로에는 나타나지 않음)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// 클라이언트가 분기할 수 있는 고정 태그를 반환합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::UnknownProvider(_) => "UNKNOWN_PROVIDER",
            AppError::CodeExchangeFailed(_) => "CODE_EXCHANGE_FAILED",
            AppError::IdentityFetchFailed(_) => "IDENTITY_FETCH_FAILED",
            AppError::RoleNotFound(_) => "ROLE_NOT_FOUND",
            AppError::RoleWriteFailed(_) => "ROLE_WRITE_FAILED",
            AppError::RoleLookupFailed(_) => "ROLE_LOOKUP_FAILED",
            AppError::SigningFailure(_) => "SIGNING_FAILURE",
            AppError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            AppError::MalformedRequest(_) => "MALFORMED_REQUEST",
            AppError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// 에러 종류별 HTTP 상태 코드 매핑 테이블
    ///
    /// 요청 경로에서 발생하는 모든 종류는 422로 통일되고,
    /// 구분은 응답 본문의 `kind`로 합니다.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownProvider(_)
            | AppError::CodeExchangeFailed(_)
            | AppError::IdentityFetchFailed(_)
            | AppError::RoleNotFound(_)
            | AppError::RoleWriteFailed(_)
            | AppError::RoleLookupFailed(_)
            | AppError::SigningFailure(_)
            | AppError::MissingRequiredField(_)
            | AppError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 핸들러의 실패는 이 한 곳을 거쳐 동일한 봉투 형식으로 직렬화됩니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        log::warn!("요청 실패 [{}]: {}", self.kind(), self);

        actix_web::HttpResponse::build(self.status()).json(ErrorEnvelope {
            error: ErrorBody {
                kind: self.kind(),
                message: self.to_string(),
            },
        })
    }
}

/// 요청 DTO 검증 실패는 필수 필드 누락으로 취급합니다.
///
/// `#[validate(message = ...)]`에 적힌 메시지만 모아 필드 이름순으로 이어 붙입니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::MissingRequiredField(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
