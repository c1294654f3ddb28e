use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::applications::Application;
use crate::domain::entities::users::User;

/// OAuth 클라이언트 자격 증명 (읽기 전용 프로젝션)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl From<&Application> for ClientCredentials {
    fn from(app: &Application) -> Self {
        Self {
            client_id: app.client_id.clone(),
            client_secret: app.client_secret.clone(),
        }
    }
}

/// 로그인 응답 DTO
///
/// 로그인 응답은 클라이언트 자격 증명 두 필드만 노출합니다.
pub type LoginResponse = ClientCredentials;

/// 회원가입 응답 DTO
///
/// 비밀번호는 쓰기 전용 필드이므로 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub username: String,
    pub email: String,
    pub client_id: String,
    pub client_secret: String,
}

impl SignUpResponse {
    pub fn new(user: &User, credentials: ClientCredentials) -> Self {
        let ClientCredentials {
            client_id,
            client_secret,
        } = credentials;

        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            client_id,
            client_secret,
        }
    }
}

/// 기본 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
            roles: user.roles.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> User {
        User::new_local("alice".into(), "alice@example.com".into(), "$2b$04$hash".into())
    }

    #[test]
    fn test_login_response_shape() {
        let app = Application::with_credentials(Uuid::new_v4(), "web", "cid", "csecret");
        let response: LoginResponse = ClientCredentials::from(&app);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "client_id": "cid", "client_secret": "csecret" }));
    }

    #[test]
    fn test_sign_up_response_has_no_password() {
        let credentials = ClientCredentials {
            client_id: "cid".into(),
            client_secret: "csecret".into(),
        };
        let json = serde_json::to_value(SignUpResponse::new(&user(), credentials)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert!(!object.contains_key("password"));
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_user_response_from_user() {
        let user = user();
        let response = UserResponse::from(&user);

        assert_eq!(response.id, user.id.to_string());
        assert_eq!(response.roles, vec!["user".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
