//! 호스트 애플리케이션 부트스트랩 헬퍼
//!
//! 프로파일별 `.env` 파일 로드와 `env_logger` 초기화를 제공합니다.
//! 호스트는 자격 증명 컴포넌트를 구성하기 전에 한 번 호출하면 됩니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

/// `RUST_LOG`가 없을 때 사용하는 기본 로그 필터
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없어도 실패하지 않고 로그만 남깁니다.
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`를 따르며 기본값은 [`DEFAULT_LOG_FILTER`]입니다.
/// 이미 로거가 설정되어 있으면 `false`를 반환하고 아무것도 하지 않습니다.
///
/// ```bash
/// RUST_LOG=rest_user::services=debug cargo test
/// ```
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .try_init()
        .is_ok()
}
