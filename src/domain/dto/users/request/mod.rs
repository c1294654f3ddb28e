//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 Rust 타입으로 표현하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: `serde` 역직렬화 (필수 필드 누락 등)
//! 2. **형식 검증**: `validator` derive (이메일, 필수값, 비밀번호 길이)
//! 3. **정규화**: `CredentialNormalizer` (소문자화, base64 디코딩, 해싱)
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며 `AppError::ValidationError`로
//! 변환됩니다.

pub mod credentials;
pub mod password_change;
pub mod sign_up;
mod password_field;

pub use credentials::Credentials;
pub use password_change::PasswordChangeRequest;
pub use sign_up::SignUpRequest;
