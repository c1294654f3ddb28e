//! # Domain Layer
//!
//! 사용자 인증 자격 증명 도메인의 엔티티와 DTO를 제공합니다.
//!
//! - [`entities`] - 사용자, OAuth 애플리케이션 레코드
//! - [`dto`] - 가입/로그인/비밀번호 변경 요청과 응답 프로젝션

pub mod entities;
pub mod dto;

pub use entities::{Application, User};
pub use dto::users::{
    ClientCredentials, Credentials, LoginResponse, PasswordChangeRequest, SignUpRequest,
    SignUpResponse, UserResponse,
};
