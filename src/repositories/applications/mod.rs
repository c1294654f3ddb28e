//! 애플리케이션 레지스트리 모듈

pub mod application_repo;

pub use application_repo::{ApplicationRegistry, InMemoryApplicationRepository};
