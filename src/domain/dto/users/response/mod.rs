//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 전달하는 프로젝션입니다.
//!
//! - **데이터 은닉**: 비밀번호와 해시는 어떤 응답에도 포함되지 않음
//! - `ClientCredentials` / `LoginResponse` - `client_id`, `client_secret`
//! - `SignUpResponse` - 가입 결과와 클라이언트 자격 증명
//! - `UserResponse` - 기본 사용자 프로젝션
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "username": "john_doe",
//!   "email": "john@example.com",
//!   "client_id": "3f0c1c5e8b7a4f0e9d2b6a1c4e5f7a8b",
//!   "client_secret": "..."
//! }
//! ```

pub mod user_response;

pub use user_response::{ClientCredentials, LoginResponse, SignUpResponse, UserResponse};
