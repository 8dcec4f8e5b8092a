//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 읽어오는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 데이터베이스, 업로드, Rate Limit, CORS 설정
//! - [`auth_config`] - JWT 서명과 만료 설정
//! - [`app_config`] - 위 설정을 시작 시점에 한 번 읽어 고정한 [`AppConfig`] 스냅샷
//!
//! 정적 설정 리더(`ServerConfig::port()` 등)는 호출할 때마다 환경 변수를 읽습니다.
//! 서비스는 이를 직접 호출하지 않고, `main`에서 만든 `AppConfig`를 주입받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("Server will bind to {}", config.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 저장소
//! export STORAGE_BACKEND="mongodb"   # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="photo_share"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_DAYS="30"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"    # development, test, staging, production
//! export BCRYPT_COST="12"            # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::AppConfig;
