//! 애플리케이션 설정 모듈
//!
//! 환경변수 기반 설정과 호스트 부트스트랩 헬퍼를 제공합니다.
//!
//! # Modules
//!
//! - [`data_config`] - 실행 환경, bcrypt cost, 비밀번호 최소 길이
//! - [`env_config`] - `.env` 프로파일 로드, 로거 초기화
//!
//! # Examples
//!
//! ```rust,ignore
//! use rest_user::config::{init_logging, load_env_file, PasswordConfig};
//!
//! load_env_file();
//! init_logging();
//! let cost = PasswordConfig::bcrypt_cost();
//! ```

pub mod data_config;
pub mod env_config;

pub use data_config::*;
pub use env_config::*;
