//! # 사용자 자격 증명 서비스
//!
//! 가입, 로그인, 사용자 조회, 비밀번호 변경 요청 흐름을 조합합니다.
//! 각 흐름은 하나의 `CredentialNormalizer`를 공유하며, 저장소와 레지스트리,
//! 사용자 프로젝션은 모두 생성 시점에 주입됩니다.
//!
//! ```text
//!   SignUpRequest ─▶ validate ─▶ normalize ─▶ UserStore::create ─┐
//!                                                                ▼
//!   SignUpResponse ◀── ClientCredentials ◀── ApplicationRegistry
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = UserService::new(
//!     Arc::new(CredentialNormalizer::new(Arc::new(BcryptPasswordHasher::from_env()))),
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(InMemoryApplicationRepository::new()),
//!     Arc::new(DefaultUserProjection),
//! );
//!
//! let response = service.sign_up(request)?;
//! ```

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{Credentials, PasswordChangeRequest, SignUpRequest},
            response::{ClientCredentials, LoginResponse, SignUpResponse},
        },
        entities::{applications::Application, users::User},
    },
    repositories::{applications::ApplicationRegistry, users::UserStore},
    services::{
        auth::{CredentialNormalizer, credential_normalizer::decode_password},
        users::user_projection::UserProjection,
    },
};

pub struct UserService {
    normalizer: Arc<CredentialNormalizer>,
    user_store: Arc<dyn UserStore>,
    applications: Arc<dyn ApplicationRegistry>,
    projection: Arc<dyn UserProjection>,

    /// 설정되면 가입 직후 이 이름으로 애플리케이션을 자동 등록
    default_application: Option<String>,
}

impl UserService {
    pub fn new(
        normalizer: Arc<CredentialNormalizer>,
        user_store: Arc<dyn UserStore>,
        applications: Arc<dyn ApplicationRegistry>,
        projection: Arc<dyn UserProjection>,
    ) -> Self {
        Self {
            normalizer,
            user_store,
            applications,
            projection,
            default_application: None,
        }
    }

    /// 가입 시 기본 애플리케이션을 자동으로 등록하도록 설정합니다.
    pub fn provision_application(mut self, name: impl Into<String>) -> Self {
        self.default_application = Some(name.into());
        self
    }

    /// 새 계정을 만들고 클라이언트 자격 증명과 함께 반환합니다.
    ///
    /// [`provision_application`](Self::provision_application)이 설정되지 않았다면
    /// 애플리케이션 등록은 호스트의 몫이며, 등록된 것이 없으면 `NotFound`가 반환됩니다.
    /// 사용자 저장 이후 단계가 실패하면 저장된 사용자를 삭제하고 원래 에러를 반환하므로,
    /// 같은 요청으로 다시 가입할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필드 검증 실패
    /// * `DecodeError` - base64가 아닌 비밀번호
    /// * `ConflictError` - 중복 사용자명/이메일
    /// * `NotFound` - 등록된 애플리케이션 없음
    pub fn sign_up(&self, request: SignUpRequest) -> AppResult<SignUpResponse> {
        let start_time = std::time::Instant::now();

        request.validate()?;

        // 필드 검증은 base64 텍스트 기준이므로 디코딩된 평문에도 같은 길이 규칙을 적용
        let plaintext = decode_password(&request.password)?;
        self.normalizer.validate_password(&String::from_utf8_lossy(&plaintext))?;

        let normalized = self.normalizer.normalize(request.into_credentials())?;
        let (username, email, password_hash) = match normalized {
            Credentials {
                username: Some(username),
                email: Some(email),
                password: Some(password_hash),
                ..
            } => (username, email, password_hash),
            _ => {
                return Err(AppError::InternalError(
                    "정규화된 가입 정보에 필수 필드가 없습니다".to_string(),
                ));
            }
        };

        let user = self.user_store.create(User::new_local(username, email, password_hash))?;

        let credentials = match self.issue_client_credentials(&user) {
            Ok(credentials) => credentials,
            Err(e) => {
                match self.user_store.delete(&user.id) {
                    Ok(_) => log::debug!("가입 롤백: {}", user.id),
                    Err(rollback) => log::error!("가입 롤백 실패 ({}): {}", user.id, rollback),
                }
                return Err(e);
            }
        };

        log::info!("사용자 가입 완료: {}", user.id);
        log::debug!("Total sign up took: {:?}", start_time.elapsed());

        Ok(SignUpResponse::new(&user, credentials))
    }

    fn issue_client_credentials(&self, user: &User) -> AppResult<ClientCredentials> {
        if let Some(name) = &self.default_application {
            self.applications.register(Application::new(user.id, name.as_str()))?;
        }

        self.normalizer.get_client_credentials(&user.id, self.applications.as_ref())
    }

    /// 로그인 응답(클라이언트 자격 증명)을 만듭니다.
    pub fn login(&self, user_id: &Uuid) -> AppResult<LoginResponse> {
        let user = self.find_user(user_id)?;

        self.normalizer.get_client_credentials(&user.id, self.applications.as_ref())
    }

    /// 주입된 프로젝션으로 사용자를 표현합니다.
    pub fn get_user(&self, user_id: &Uuid) -> AppResult<Value> {
        let user = self.find_user(user_id)?;

        self.projection.project(&user)
    }

    /// 기존 비밀번호를 확인하고 새 비밀번호로 교체합니다.
    ///
    /// 비밀번호 변경 요청의 값은 base64 인코딩되지 않은 평문으로 받습니다.
    pub fn change_password(&self, user_id: &Uuid, request: PasswordChangeRequest) -> AppResult<()> {
        request.validate()?;

        let user = self.find_user(user_id)?;
        let current_hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::AuthenticationError("비밀번호로 인증할 수 없는 계정입니다".to_string()))?;

        let hasher = self.normalizer.hasher();
        if !hasher.verify(request.old_password.as_bytes(), current_hash)? {
            return Err(AppError::AuthenticationError("Old password is incorrect".to_string()));
        }

        let new_hash = hasher.hash(request.password.as_bytes())?;
        self.user_store.update_password_hash(&user.id, new_hash)?;

        log::info!("비밀번호 변경 완료: {}", user.id);

        Ok(())
    }

    fn find_user(&self, user_id: &Uuid) -> AppResult<User> {
        self.user_store
            .find_by_id(user_id)?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
