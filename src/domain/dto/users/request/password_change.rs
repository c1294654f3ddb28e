//! 비밀번호 변경 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::password_field::validate_password_field;

/// 비밀번호 변경 요청
///
/// 두 필드 모두 필수이며, 기존/새 비밀번호 모두에 가입과 동일한 길이 규칙이 적용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordChangeRequest {
    #[validate(length(min = 1, message = "This field is required."))]
    #[validate(custom(function = "validate_password_field"))]
    pub old_password: String,

    #[validate(length(min = 1, message = "This field is required."))]
    #[validate(custom(function = "validate_password_field"))]
    pub password: String,
}
