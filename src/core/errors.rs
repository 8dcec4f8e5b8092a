//! # Application Error Handling System
//!
//! 포토 공유 백엔드의 통합 에러 처리 시스템입니다.
//! 서비스 계층에서 발생한 에러를 `AppError` 하나로 모으고,
//! `actix_web::ResponseError` 구현을 통해 일관된 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 이미지 파일 누락 |
//! | `ConflictError` | 400 Bad Request | 이미 가입된 이메일 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락/만료, 로그인 실패 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자의 이미지 삭제 시도 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `PayloadTooLarge` | 413 Payload Too Large | 업로드 용량 초과 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 본문
//!
//! 4xx 응답은 클라이언트가 그대로 표시할 수 있는 메시지를 담습니다.
//!
//! ```json
//! { "message": "Image not found" }
//! ```
//!
//! 5xx 응답은 고정 메시지와 함께 원인을 `error` 필드로 전달합니다.
//!
//! ```json
//! { "message": "Server Error", "error": "connection reset" }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 클라이언트에게 보여줄 메시지를 그대로 보관합니다.
/// `Display` 구현은 로그용으로 변형 이름 접두사를 붙입니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(doc! { "email": email }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 소유권 검사
/// if !image.is_owned_by(&requester) {
///     return Err(AppError::AuthorizationError("Not authorized".to_string()));
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 이메일 형식 오류, 업로드 파일 누락 등
    /// 클라이언트 요청 자체가 잘못된 경우입니다. 400으로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 존재하지 않거나 이미 삭제된 사용자/이미지에 접근한 경우입니다.
    /// 형식이 잘못된 ID도 같은 결과로 취급합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 에러
    ///
    /// 이미 가입된 이메일로 회원가입을 시도한 경우입니다.
    /// 기존 클라이언트와의 호환을 위해 400으로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// # 발생 시나리오
    /// - Authorization 헤더 누락
    /// - 만료되었거나 서명이 맞지 않는 토큰
    /// - 토큰의 사용자가 더 이상 존재하지 않음
    /// - 잘못된 이메일 또는 비밀번호
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    ///
    /// 인증은 되었지만 대상 리소스의 소유자가 아닌 경우입니다. 403으로 응답됩니다.
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 업로드 용량 초과
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// 내부 서버 에러
    ///
    /// 해싱, 토큰 서명 실패처럼 예상하지 못한 시스템 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지 본문을 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 전체 내용을 남기고,
    /// 클라이언트에게는 `"Server Error"` 메시지와 원인만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let body = if status.is_server_error() {
            log::error!("❌ {}", self);
            serde_json::json!({
                "message": "Server Error",
                "error": self.message(),
            })
        } else {
            serde_json::json!({ "message": self.message() })
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn list_by_owner(&self, owner: &ObjectId) -> AppResult<Vec<ImageResponse>> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// JWT 검증 실패 원인
///
/// 토큰 서비스는 실패 원인을 구분해서 돌려주고,
/// 인증 미들웨어가 이를 사용자용 메시지로 바꿉니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 서명이 현재 비밀키와 일치하지 않음
    #[error("token signature mismatch")]
    InvalidSignature,

    /// 만료 시각에 도달함 (`now >= exp`)
    #[error("token expired")]
    Expired,

    /// 토큰 구조나 클레임을 해석할 수 없음
    #[error("malformed token")]
    Malformed,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::AuthenticationError("Token expired".to_string()),
            TokenError::InvalidSignature | TokenError::Malformed => {
                AppError::AuthenticationError("Invalid token".to_string())
            }
        }
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
