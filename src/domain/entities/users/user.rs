//! 사용자 엔티티
//!
//! 외부 사용자 저장소가 보관하는 레코드의 형태입니다. 이 크레이트는 정규화된
//! 속성으로 엔티티를 만들어 저장소에 넘길 뿐, 직접 영속화하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,

    /// 솔트가 포함된 단방향 해시. 직렬화 대상에서 항상 제외됩니다.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    pub is_active: bool,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 정규화가 끝난 속성으로 로컬 계정 사용자를 생성합니다.
    pub fn new_local(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash: Some(password_hash),
            is_active: true,
            roles: vec!["user".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// 비밀번호 해시를 교체하고 수정 시각을 갱신합니다.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = Some(password_hash);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_defaults() {
        let user = User::new_local("alice".into(), "alice@example.com".into(), "$2b$04$hash".into());

        assert!(user.is_active);
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert!(user.can_authenticate_with_password());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User::new_local("alice".into(), "alice@example.com".into(), "$2b$04$hash".into());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_set_password_hash_updates_timestamp() {
        let mut user = User::new_local("alice".into(), "alice@example.com".into(), "old".into());
        let before = user.updated_at;

        user.set_password_hash("new".into());

        assert_eq!(user.password_hash.as_deref(), Some("new"));
        assert!(user.updated_at >= before);
    }
}
