//! OAuth 애플리케이션 엔티티
//!
//! 사용자에게 등록된 OAuth 클라이언트 레코드입니다. 외부 애플리케이션
//! 레지스트리가 보관하며, 이 크레이트는 첫 번째 레코드의 클라이언트 자격 증명만
//! 읽습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub client_id: String,
    pub client_secret: String,

    /// "첫 번째" 애플리케이션을 결정하는 정렬 기준
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// 무작위 클라이언트 ID/시크릿을 가진 새 애플리케이션을 생성합니다.
    pub fn new(user_id: Uuid, name: impl Into<String>) -> Self {
        Self::with_credentials(
            user_id,
            name,
            Uuid::new_v4().simple().to_string(),
            format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()),
        )
    }

    /// 이미 발급된 자격 증명으로 애플리케이션 레코드를 만듭니다.
    pub fn with_credentials(
        user_id: Uuid,
        name: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            created_at: Utc::now(),
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
