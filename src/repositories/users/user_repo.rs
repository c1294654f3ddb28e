//! # 사용자 저장소
//!
//! 사용자 레코드를 읽고 쓰는 외부 협력자 인터페이스와, 호스트 개발/테스트용
//! 인메모리 구현을 제공합니다. 자격 증명 정규화 컴포넌트는 이 저장소를 직접
//! 호출하지 않으며, 정규화된 속성만 넘겨줍니다.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;

/// 사용자 저장소 협력자
///
/// 사용자명과 이메일은 정규화(소문자화)된 값으로 전달된다고 가정합니다.
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장합니다. 사용자명/이메일이 중복이면 `ConflictError`.
    fn create(&self, user: User) -> AppResult<User>;

    fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;

    fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 비밀번호 해시를 교체합니다. 사용자가 없으면 `NotFound`.
    fn update_password_hash(&self, id: &Uuid, password_hash: String) -> AppResult<User>;

    /// 사용자를 삭제합니다. 삭제된 사용자가 있었으면 `true`.
    fn delete(&self, id: &Uuid) -> AppResult<bool>;
}

/// `RwLock<HashMap>` 기반 인메모리 사용자 저장소
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_by<P>(&self, predicate: P) -> AppResult<Option<User>>
    where
        P: Fn(&User) -> bool,
    {
        let users = self.users
            .read()
            .map_err(|e| AppError::InternalError(format!("사용자 저장소 읽기 실패: {}", e)))?;

        Ok(users.values().find(|user| predicate(user)).cloned())
    }
}

impl UserStore for InMemoryUserRepository {
    fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users
            .write()
            .map_err(|e| AppError::InternalError(format!("사용자 저장소 쓰기 실패: {}", e)))?;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("A user with that email already exists".to_string()));
        }

        if users.values().any(|existing| existing.username == user.username) {
            return Err(AppError::ConflictError("A user with that username already exists".to_string()));
        }

        users.insert(user.id, user.clone());
        log::debug!("사용자 저장 완료: {}", user.id);

        Ok(user)
    }

    fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        self.find_by(|user| &user.id == id)
    }

    fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_by(|user| user.username == username)
    }

    fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_by(|user| user.email == email)
    }

    fn update_password_hash(&self, id: &Uuid, password_hash: String) -> AppResult<User> {
        let mut users = self.users
            .write()
            .map_err(|e| AppError::InternalError(format!("사용자 저장소 쓰기 실패: {}", e)))?;

        let user = users
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user.set_password_hash(password_hash);

        Ok(user.clone())
    }

    fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut users = self.users
            .write()
            .map_err(|e| AppError::InternalError(format!("사용자 저장소 쓰기 실패: {}", e)))?;

        Ok(users.remove(id).is_some())
    }
}
