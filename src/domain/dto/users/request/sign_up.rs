//! # 회원가입 요청 DTO
//!
//! 가입 요청은 `username`, `email`, `password`(base64) 세 필드를 받습니다.
//! 비밀번호는 쓰기 전용이며 응답에는 절대 포함되지 않습니다.
//!
//! ## 검증 규칙
//!
//! - `username`: 필수
//! - `email`: 이메일 형식
//! - `password`: 제출된 값 기준 최소 6자 (디코딩 전 필드 단위 검증)
//!
//! 대소문자 정규화와 해싱은 검증 이후 `CredentialNormalizer`가 수행합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::password_field::validate_password_field;
use super::Credentials;

/// 새 계정 가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    /// base64로 인코딩된 비밀번호
    #[validate(custom(function = "validate_password_field"))]
    pub password: String,
}

impl SignUpRequest {
    pub fn into_credentials(self) -> Credentials {
        Credentials {
            username: Some(self.username),
            email: Some(self.email),
            password: Some(self.password),
            old_password: None,
        }
    }
}
