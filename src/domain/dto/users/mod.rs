//! 사용자 자격 증명 DTO 모듈
//!
//! - [`request`] - `Credentials`, `SignUpRequest`, `PasswordChangeRequest`
//! - [`response`] - `ClientCredentials`, `SignUpResponse`, `UserResponse`

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
