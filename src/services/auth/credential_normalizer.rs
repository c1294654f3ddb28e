//! # 자격 증명 정규화
//!
//! 가입/로그인 요청의 원시 속성을 저장 가능한 형태로 정규화합니다.
//!
//! ```text
//! HTTP 계층 ──▶ CredentialNormalizer::normalize ──▶ 외부 사용자 저장소
//!
//!  username  : "John_Doe"       → "john_doe"
//!  email     : "John@Ex.com"    → "john@ex.com"
//!  password  : "c2VjcmV0MTIz"   → base64 디코딩 → bcrypt 해시
//! ```
//!
//! 컴포넌트는 상태가 없고 재진입 가능하며, 주입된 해셔 외에는 의존성이 없습니다.
//! 모든 에러는 호출자에게 그대로 전파됩니다.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use uuid::Uuid;

use crate::config::MIN_PASSWORD_LENGTH;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::Credentials;
use crate::domain::dto::users::response::ClientCredentials;
use crate::repositories::applications::ApplicationRegistry;
use crate::services::auth::password_hasher::PasswordHasher;

pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters";

/// 비밀번호 길이 규칙
///
/// 가입과 비밀번호 변경 흐름이 공유하는 유일한 규칙입니다. 길이는 바이트가 아닌
/// 문자(유니코드 스칼라) 수로 계산합니다.
///
/// # 예제
///
/// ```rust
/// use rest_user::services::auth::credential_normalizer::validate_password;
///
/// assert!(validate_password("abc").is_err());
/// assert_eq!(validate_password("abcdef").unwrap(), "abcdef");
/// ```
pub fn validate_password(value: &str) -> AppResult<String> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::ValidationError(PASSWORD_TOO_SHORT_MESSAGE.to_string()));
    }
    Ok(value.to_string())
}

/// base64 비밀번호를 원시 바이트로 디코딩합니다.
///
/// MIME 형식 줄바꿈을 허용하기 위해 ASCII 공백은 제거한 뒤 표준 알파벳으로 엄격하게
/// 디코딩합니다.
pub fn decode_password(encoded: &str) -> AppResult<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    Ok(general_purpose::STANDARD.decode(compact)?)
}

/// 자격 증명 정규화 컴포넌트
pub struct CredentialNormalizer {
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialNormalizer {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &Arc<dyn PasswordHasher> {
        &self.hasher
    }

    /// 자격 증명을 정규화합니다.
    ///
    /// - `username`, `email`: 값이 있으면 소문자화
    /// - `password`: 값이 있으면 base64 디코딩 후 해시로 교체
    /// - `old_password`: 변경하지 않음
    ///
    /// 빈 문자열은 값이 없는 것으로 보고 그대로 둡니다. 결과를 저장하지는 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DecodeError` - 비밀번호가 올바른 base64가 아닌 경우
    /// * `AppError::InternalError` - 해싱 백엔드 실패
    pub fn normalize(&self, mut attrs: Credentials) -> AppResult<Credentials> {
        if let Some(username) = attrs.username.as_mut().filter(|v| !v.is_empty()) {
            *username = username.to_lowercase();
        }

        if let Some(email) = attrs.email.as_mut().filter(|v| !v.is_empty()) {
            *email = email.to_lowercase();
        }

        if let Some(password) = attrs.password.as_mut().filter(|v| !v.is_empty()) {
            let raw = decode_password(password)?;
            *password = self.hasher.hash(&raw)?;
        }

        log::debug!(
            "자격 증명 정규화 완료 (username: {}, email: {}, password: {})",
            attrs.username.is_some(),
            attrs.email.is_some(),
            attrs.password.is_some(),
        );

        Ok(attrs)
    }

    /// 비밀번호 길이 규칙을 적용합니다. [`validate_password`] 참고.
    pub fn validate_password(&self, value: &str) -> AppResult<String> {
        validate_password(value)
    }

    /// 사용자의 첫 번째 애플리케이션 클라이언트 자격 증명을 반환합니다.
    ///
    /// "첫 번째"는 `created_at`이 가장 이른 애플리케이션이며, 생성 시각이 같으면
    /// 레지스트리가 돌려준 순서(삽입 순서)에서 앞선 것을 선택합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 등록된 애플리케이션이 없는 경우
    pub fn get_client_credentials(
        &self,
        user_id: &Uuid,
        registry: &dyn ApplicationRegistry,
    ) -> AppResult<ClientCredentials> {
        let applications = registry.find_by_user(user_id)?;

        applications
            .iter()
            .min_by_key(|app| app.created_at)
            .map(ClientCredentials::from)
            .ok_or_else(|| AppError::NotFound(format!("No application registered for user {}", user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::applications::Application;
    use crate::repositories::applications::InMemoryApplicationRepository;
    use crate::services::auth::password_hasher::BcryptPasswordHasher;
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    fn normalizer() -> CredentialNormalizer {
        CredentialNormalizer::new(Arc::new(BcryptPasswordHasher::new(4)))
    }

    fn encode(plain: &[u8]) -> String {
        general_purpose::STANDARD.encode(plain)
    }

    #[test]
    fn test_username_and_email_are_lowercased() {
        let creds = Credentials::new()
            .username("John_DOE")
            .email("John.Doe@Example.COM");

        let normalized = normalizer().normalize(creds).unwrap();

        assert_eq!(normalized.username.as_deref(), Some("john_doe"));
        assert_eq!(normalized.email.as_deref(), Some("john.doe@example.com"));
        assert!(normalized.password.is_none());
    }

    #[test]
    fn test_password_is_decoded_and_hashed() {
        let encoded = encode(b"secret123");
        let normalizer = normalizer();

        let normalized = normalizer.normalize(Credentials::new().password(encoded.clone())).unwrap();
        let hashed = normalized.password.unwrap();

        assert_ne!(hashed, "secret123");
        assert_ne!(hashed, encoded);
        assert!(normalizer.hasher().verify(b"secret123", &hashed).unwrap());
        assert!(!normalizer.hasher().verify(encoded.as_bytes(), &hashed).unwrap());
    }

    #[test]
    fn test_password_with_line_breaks_is_accepted() {
        let normalizer = normalizer();
        let normalized = normalizer
            .normalize(Credentials::new().password("c2VjcmV0\nMTIz\n"))
            .unwrap();

        assert!(normalizer.hasher().verify(b"secret123", &normalized.password.unwrap()).unwrap());
    }

    #[test]
    fn test_invalid_base64_is_decode_error() {
        let result = normalizer().normalize(Credentials::new().password("not-base64!!"));

        assert!(matches!(result, Err(AppError::DecodeError(_))));
    }

    #[test]
    fn test_empty_values_are_left_untouched() {
        let creds = Credentials::new().username("").email("").password("");

        let normalized = normalizer().normalize(creds.clone()).unwrap();

        assert_eq!(normalized, creds);
    }

    #[test]
    fn test_old_password_is_not_normalized() {
        let creds = Credentials::new().old_password("OldPass==");

        let normalized = normalizer().normalize(creds).unwrap();

        assert_eq!(normalized.old_password.as_deref(), Some("OldPass=="));
    }

    #[test]
    fn test_validate_password() {
        let normalizer = normalizer();

        match normalizer.validate_password("abc") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, PASSWORD_TOO_SHORT_MESSAGE),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
        assert_eq!(normalizer.validate_password("abcdef").unwrap(), "abcdef");
    }

    #[test]
    fn test_validate_password_counts_characters() {
        // 6글자, 18바이트
        assert!(validate_password("비밀번호여섯").is_ok());
        // 5글자, 15바이트
        assert!(validate_password("비밀번호다").is_err());
    }

    #[test]
    fn test_client_credentials_without_application() {
        let registry = InMemoryApplicationRepository::new();

        let result = normalizer().get_client_credentials(&Uuid::new_v4(), &registry);

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_client_credentials_returns_first_application() {
        let registry = InMemoryApplicationRepository::new();
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        registry
            .register(Application::with_credentials(user_id, "A", "id-a", "secret-a").created_at(now))
            .unwrap();
        registry
            .register(Application::with_credentials(user_id, "B", "id-b", "secret-b").created_at(now))
            .unwrap();

        let credentials = normalizer().get_client_credentials(&user_id, &registry).unwrap();

        assert_eq!(credentials.client_id, "id-a");
        assert_eq!(credentials.client_secret, "secret-a");
    }

    #[test]
    fn test_client_credentials_prefers_earliest_created() {
        let registry = InMemoryApplicationRepository::new();
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        registry
            .register(Application::with_credentials(user_id, "late", "id-late", "s-late").created_at(now))
            .unwrap();
        registry
            .register(
                Application::with_credentials(user_id, "early", "id-early", "s-early")
                    .created_at(now - Duration::days(1)),
            )
            .unwrap();

        let credentials = normalizer().get_client_credentials(&user_id, &registry).unwrap();

        assert_eq!(credentials.client_id, "id-early");
    }

    proptest! {
        #[test]
        fn prop_username_is_lowercased(s in ".*") {
            let normalized = normalizer().normalize(Credentials::new().username(s.clone())).unwrap();
            prop_assert_eq!(normalized.username, Some(s.to_lowercase()));
        }

        #[test]
        fn prop_email_is_lowercased(s in ".*") {
            let normalized = normalizer().normalize(Credentials::new().email(s.clone())).unwrap();
            prop_assert_eq!(normalized.email, Some(s.to_lowercase()));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_password_hash_verifies(plain in proptest::collection::vec(any::<u8>(), 1..48)) {
            let encoded = encode(&plain);
            let normalizer = normalizer();

            let hashed = normalizer
                .normalize(Credentials::new().password(encoded.clone()))
                .unwrap()
                .password
                .unwrap();

            prop_assert!(normalizer.hasher().verify(&plain, &hashed).unwrap());
            prop_assert_ne!(hashed.as_bytes(), plain.as_slice());
            prop_assert_ne!(&hashed, &encoded);
        }
    }
}
