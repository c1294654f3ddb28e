//! 인증 자격 증명 서비스 모듈
//!
//! - [`credential_normalizer`] - 소문자화, base64 디코딩, 해싱, 길이 검증, 클라이언트 자격 증명 조회
//! - [`password_hasher`] - 솔트 포함 단방향 해시 협력자와 bcrypt 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rest_user::services::auth::{BcryptPasswordHasher, CredentialNormalizer};
//!
//! let normalizer = CredentialNormalizer::new(Arc::new(BcryptPasswordHasher::from_env()));
//! let normalized = normalizer.normalize(credentials)?;
//! ```

pub mod credential_normalizer;
pub mod password_hasher;

pub use credential_normalizer::{CredentialNormalizer, validate_password};
pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
