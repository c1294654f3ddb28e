//! 사용자 요청 흐름 서비스 모듈
//!
//! 가입, 로그인, 사용자 조회, 비밀번호 변경 흐름을 제공합니다.
//! 모든 흐름은 상속 대신 하나의 `CredentialNormalizer`를 조합해서 사용합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일/사용자명 대소문자 무관 중복 방지
//! - 비밀번호는 응답과 로그에 남기지 않음

pub mod user_projection;
pub mod user_service;

pub use user_projection::{DefaultUserProjection, UserProjection};
pub use user_service::UserService;
