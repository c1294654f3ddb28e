//! 정규화 대상 자격 증명
//!
//! 가입/로그인 요청에서 추출한 원시 속성입니다. 요청마다 생성되어
//! `CredentialNormalizer::normalize`에서 한 번 소비된 뒤 외부 저장소로 전달됩니다.

use serde::{Deserialize, Serialize};

/// 요청 단위의 임시 자격 증명
///
/// 모든 필드는 선택 사항이며, 빈 문자열은 값이 없는 것과 동일하게 취급됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "username": "John_Doe",
///   "email": "John@Example.com",
///   "password": "c2VjcmV0MTIz"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: Option<String>,
    pub email: Option<String>,

    /// 입력 시 base64 인코딩, 정규화 후 단방향 해시
    pub password: Option<String>,

    /// 정규화 대상이 아님
    pub old_password: Option<String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn old_password(mut self, old_password: impl Into<String>) -> Self {
        self.old_password = Some(old_password.into());
        self
    }
}
