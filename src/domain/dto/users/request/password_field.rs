//! `validator` 커스텀 함수 어댑터
//!
//! 비밀번호 길이 규칙은 `CredentialNormalizer::validate_password` 하나뿐이며,
//! DTO는 이 어댑터를 통해 같은 규칙을 재사용합니다.

use validator::ValidationError;

use crate::services::auth::credential_normalizer::{validate_password, PASSWORD_TOO_SHORT_MESSAGE};

pub(super) fn validate_password_field(value: &str) -> Result<(), ValidationError> {
    validate_password(value)
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("password_too_short")
                .with_message(PASSWORD_TOO_SHORT_MESSAGE.into())
        })
}
