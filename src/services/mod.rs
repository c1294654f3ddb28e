//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 협력자는 모두 생성 시점에 `Arc`로 주입됩니다.
//!
//! # Features
//!
//! - 자격 증명 정규화 (소문자화, base64 디코딩, 해싱)
//! - 비밀번호 길이 검증
//! - 클라이언트 자격 증명 조회
//! - 가입/로그인/비밀번호 변경 흐름
//!
//! # Examples
//!
//! ```rust,ignore
//! use rest_user::services::{auth::CredentialNormalizer, users::UserService};
//! ```

pub mod auth;
pub mod users;
