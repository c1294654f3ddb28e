//! 사용자 인증 자격 증명 라이브러리
//!
//! 가입/로그인 요청의 자격 증명을 저장 가능한 형태로 정규화하고, 비밀번호 길이를
//! 검증하며, 사용자의 첫 번째 OAuth 애플리케이션 클라이언트 자격 증명을 제공합니다.
//!
//! # Features
//!
//! - **정규화**: 사용자명/이메일 소문자화, base64 비밀번호 디코딩 및 bcrypt 해싱
//! - **검증**: 비밀번호 최소 6자 규칙, `validator` 기반 요청 DTO 검증
//! - **클라이언트 자격 증명**: 가장 먼저 생성된 애플리케이션의 `client_id`/`client_secret`
//! - **명시적 의존성 주입**: 해셔, 저장소, 레지스트리, 사용자 프로젝션을 생성 시점에 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP 계층     │ ← 호스트 프레임워크 (범위 밖)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DTO + 검증     │ ← domain::dto
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CredentialNormalizer, UserService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, ApplicationRegistry (외부 협력자)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use rest_user::domain::dto::users::request::Credentials;
//! use rest_user::services::auth::{BcryptPasswordHasher, CredentialNormalizer, PasswordHasher};
//!
//! let hasher = Arc::new(BcryptPasswordHasher::new(4));
//! let normalizer = CredentialNormalizer::new(hasher.clone());
//!
//! let normalized = normalizer
//!     .normalize(Credentials::new().username("John").password("c2VjcmV0MTIz"))
//!     .unwrap();
//!
//! assert_eq!(normalized.username.as_deref(), Some("john"));
//! assert!(hasher.verify(b"secret123", &normalized.password.unwrap()).unwrap());
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
