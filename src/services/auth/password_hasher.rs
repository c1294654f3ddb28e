//! # 비밀번호 해셔
//!
//! 솔트가 포함된 단방향 해시 함수 협력자입니다. 정규화 컴포넌트는 알고리즘을
//! 알지 못하고 "비가역, 솔트 포함, 검증 가능" 성질만 요구합니다.
//!
//! 기본 구현인 [`BcryptPasswordHasher`]는 환경별 bcrypt cost를 사용합니다.
//!
//! | 환경 | cost |
//! |------|------|
//! | Development / Test | 4 |
//! | Staging | 10 |
//! | Production | 12 |
//!
//! `BCRYPT_COST` 환경변수(4~15)로 덮어쓸 수 있습니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 해싱 협력자
///
/// 입력은 바이트열입니다. base64 디코딩 결과가 UTF-8이라는 보장이 없기 때문입니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문을 솔트가 포함된 해시 문자열로 변환합니다.
    fn hash(&self, password: &[u8]) -> AppResult<String>;

    /// 평문이 해시와 일치하면 `Ok(true)`.
    fn verify(&self, password: &[u8], hash: &str) -> AppResult<bool>;
}

/// bcrypt 기반 해셔
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::from_env()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &[u8]) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(hashed)
    }

    fn verify(&self, password: &[u8], hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, hash).context("비밀번호 검증 실패")
    }
}
