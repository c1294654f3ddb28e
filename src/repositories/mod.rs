//! 외부 협력자(저장소) 계층 모듈
//!
//! 자격 증명 컴포넌트가 의존하는 저장소를 trait으로 정의하고, 호스트 개발과
//! 테스트에 쓰는 인메모리 구현을 함께 제공합니다. 실제 영속화 엔진은 호스트가
//! 같은 trait을 구현해 생성 시점에 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rest_user::repositories::{InMemoryUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = users.find_by_email("user@example.com")?;
//! ```

pub mod users;
pub mod applications;

pub use users::{InMemoryUserRepository, UserStore};
pub use applications::{ApplicationRegistry, InMemoryApplicationRepository};
