//! # Data Transfer Objects
//!
//! HTTP 계층과 주고받는 요청/응답 구조체입니다. 요청 파싱 자체는 호스트
//! 프레임워크가 담당하며, 이 모듈은 `serde` 역직렬화 형태와 `validator`
//! 검증 규칙만 정의합니다.

pub mod users;

pub use users::*;
