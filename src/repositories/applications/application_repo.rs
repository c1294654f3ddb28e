//! # 애플리케이션 레지스트리
//!
//! 사용자 ID로 등록된 OAuth 애플리케이션 목록을 조회하는 외부 협력자
//! 인터페이스와 인메모리 구현입니다.

use std::sync::RwLock;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::applications::Application;

/// 애플리케이션 레지스트리 협력자
pub trait ApplicationRegistry: Send + Sync {
    fn register(&self, application: Application) -> AppResult<Application>;

    /// 사용자의 애플리케이션을 등록(삽입) 순서대로 반환합니다.
    fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Application>>;
}

/// 삽입 순서를 보존하는 인메모리 레지스트리
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: RwLock<Vec<Application>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApplicationRegistry for InMemoryApplicationRepository {
    fn register(&self, application: Application) -> AppResult<Application> {
        let mut applications = self.applications
            .write()
            .map_err(|e| AppError::InternalError(format!("애플리케이션 레지스트리 쓰기 실패: {}", e)))?;

        if applications.iter().any(|app| app.client_id == application.client_id) {
            return Err(AppError::ConflictError("Client id already registered".to_string()));
        }

        applications.push(application.clone());

        Ok(application)
    }

    fn find_by_user(&self, user_id: &Uuid) -> AppResult<Vec<Application>> {
        let applications = self.applications
            .read()
            .map_err(|e| AppError::InternalError(format!("애플리케이션 레지스트리 읽기 실패: {}", e)))?;

        Ok(applications
            .iter()
            .filter(|app| &app.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_user_keeps_insertion_order() {
        let repo = InMemoryApplicationRepository::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        repo.register(Application::with_credentials(owner, "a", "id-a", "s-a")).unwrap();
        repo.register(Application::with_credentials(other, "x", "id-x", "s-x")).unwrap();
        repo.register(Application::with_credentials(owner, "b", "id-b", "s-b")).unwrap();

        let ids: Vec<_> = repo
            .find_by_user(&owner)
            .unwrap()
            .into_iter()
            .map(|app| app.client_id)
            .collect();

        assert_eq!(ids, vec!["id-a".to_string(), "id-b".to_string()]);
    }

    #[test]
    fn test_unknown_user_has_no_applications() {
        let repo = InMemoryApplicationRepository::new();

        assert!(repo.find_by_user(&Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_client_id_conflicts() {
        let repo = InMemoryApplicationRepository::new();
        let owner = Uuid::new_v4();
        repo.register(Application::with_credentials(owner, "a", "same", "s1")).unwrap();

        let result = repo.register(Application::with_credentials(owner, "b", "same", "s2"));
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }
}
