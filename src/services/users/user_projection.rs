//! # 사용자 프로젝션
//!
//! 프로젝트마다 사용자 표현이 다르기 때문에, 호스트는 원하는 프로젝션 전략을
//! `UserService` 생성 시점에 주입합니다. 설정 문자열로 타입을 찾는 런타임 조회는
//! 하지 않습니다.

use serde_json::Value;

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;

/// 사용자 레코드를 응답 표현으로 바꾸는 전략
pub trait UserProjection: Send + Sync {
    fn project(&self, user: &User) -> AppResult<Value>;
}

/// `UserResponse` 필드를 그대로 노출하는 기본 프로젝션
#[derive(Debug, Default, Clone)]
pub struct DefaultUserProjection;

impl UserProjection for DefaultUserProjection {
    fn project(&self, user: &User) -> AppResult<Value> {
        serde_json::to_value(UserResponse::from(user)).context("사용자 직렬화 실패")
    }
}
