//! # 인증 자격 증명 에러 처리
//!
//! 자격 증명 정규화, 비밀번호 검증, 클라이언트 자격 증명 조회 과정에서
//! 발생하는 모든 에러를 하나의 열거형으로 표현합니다.
//!
//! 이 크레이트는 HTTP 응답을 직접 만들지 않습니다. 호스트 프레임워크(Actix-Web)가
//! 에러를 사용자에게 노출할 수 있도록 `ResponseError` 구현만 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 비밀번호 길이 미달, 입력값 검증 실패 |
//! | `DecodeError` | 400 Bad Request | base64 형식이 아닌 비밀번호 |
//! | `AuthenticationError` | 401 Unauthorized | 기존 비밀번호 불일치 |
//! | `NotFound` | 404 Not Found | 애플리케이션/사용자 없음 |
//! | `ConflictError` | 409 Conflict | 중복 사용자명/이메일 |
//! | `InternalError` | 500 Internal Server Error | 해싱 백엔드 오류 등 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use rest_user::core::errors::{AppError, AppResult};
//!
//! fn client_id_of(apps: &[Application]) -> AppResult<String> {
//!     apps.first()
//!         .map(|app| app.client_id.clone())
//!         .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
//! }
//! ```

use thiserror::Error;

/// 크레이트 전역 에러 타입
///
/// 모든 에러는 호출자에게 동기적으로 전파되며, 내부에서 로깅하거나
/// 재시도하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 비밀번호가 6자 미만이거나 요청 DTO 검증에 실패했을 때 발생합니다.
    /// 호출자는 사용자에게 재입력을 요청할 수 있습니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// if value.chars().count() < MIN_PASSWORD_LENGTH {
    ///     return Err(AppError::ValidationError(
    ///         "Password must be at least 6 characters".to_string()
    ///     ));
    /// }
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// base64 디코딩 에러
    ///
    /// 비밀번호 필드가 올바른 base64 문자열이 아닐 때 발생합니다.
    /// 잘못된 형식의 요청으로 취급되며 재시도하지 않습니다.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 클라이언트 자격 증명을 요청한 사용자에게 등록된 애플리케이션이 없거나,
    /// 존재하지 않는 사용자를 조회할 때 발생합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 사용 중인 사용자명이나 이메일로 가입을 시도할 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 비밀번호 변경 시 기존 비밀번호가 저장된 해시와 일치하지 않을 때 발생합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 에러
    ///
    /// 해싱 백엔드 실패, 손상된 락 등 예상하지 못한 오류입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<base64::DecodeError> for AppError {
    fn from(e: base64::DecodeError) -> Self {
        AppError::DecodeError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    /// 각 변형을 HTTP 상태 코드와 `{"error": "..."}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) | AppError::DecodeError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 `AppError::InternalError`로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use rest_user::core::errors::ErrorContext;
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
