//! # Core Module
//!
//! 크레이트 전반에서 공유하는 에러 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 정규화/검증/조회 에러를 포괄하는 열거형
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 호스트가 그대로 응답 변환
//! - **자동 변환**: `base64`, `validator` 에러의 `From` 구현

pub mod errors;

pub use errors::*;
