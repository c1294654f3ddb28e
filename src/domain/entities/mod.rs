//! # Domain Entities Module
//!
//! 외부 협력자(사용자 저장소, 애플리케이션 레지스트리)가 보관하는 레코드를
//! 정의합니다. 이 크레이트는 엔티티를 만들고 읽을 뿐 영속화는 협력자에게 맡깁니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, Application)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod users;
pub mod applications;

pub use users::User;
pub use applications::Application;
