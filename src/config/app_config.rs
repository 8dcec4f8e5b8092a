//! 애플리케이션 설정 스냅샷
//!
//! 정적 설정 리더들이 돌려주는 값을 한 구조체로 모읍니다.
//! 시작 시점에 한 번 만들어 `ServiceRegistry`에 주입하므로,
//! 요청 처리 중에는 환경 변수를 다시 읽지 않습니다.

use crate::config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, PasswordConfig, RateLimitConfig,
    ServerConfig, StorageBackend, UploadConfig,
};

/// 시작 시점에 고정되는 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub storage_backend: StorageBackend,
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    /// 토큰 만료 기간 (일)
    pub token_ttl_days: i64,
    pub bcrypt_cost: u32,
    /// 업로드 파일 하나의 최대 바이트 수
    pub max_upload_bytes: usize,
    /// JSON/폼 본문의 최대 바이트 수
    pub json_limit_bytes: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst_size: u32,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 읽어옵니다.
    ///
    /// 각 항목의 기본값은 해당 설정 리더의 문서를 따릅니다.
    pub fn from_env() -> Self {
        let config = Self {
            environment: Environment::current(),
            host: ServerConfig::host(),
            port: ServerConfig::port(),
            workers: ServerConfig::workers(),
            storage_backend: DatabaseConfig::storage_backend(),
            mongodb_uri: DatabaseConfig::uri(),
            database_name: DatabaseConfig::name(),
            jwt_secret: JwtConfig::secret(),
            token_ttl_days: JwtConfig::expiration_days(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            max_upload_bytes: UploadConfig::max_file_bytes(),
            json_limit_bytes: UploadConfig::json_limit_bytes(),
            rate_limit_per_second: RateLimitConfig::per_second(),
            rate_limit_burst_size: RateLimitConfig::burst_size(),
            cors_allowed_origins: CorsConfig::allowed_origins(),
        };

        log::info!(
            "⚙️ 설정 로드됨: env={}, storage={:?}, bind={}, token_ttl={}d, bcrypt_cost={}",
            config.environment.as_str(),
            config.storage_backend,
            config.bind_address(),
            config.token_ttl_days,
            config.bcrypt_cost
        );

        config
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 환경 변수를 읽지 않는 개발용 기본값
///
/// 테스트에서는 필요한 항목만 덮어써서 사용합니다.
///
/// ```rust,ignore
/// let config = AppConfig {
///     jwt_secret: "test-secret".to_string(),
///     ..AppConfig::default()
/// };
/// ```
impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::Development;
        let bcrypt_cost = PasswordConfig::bcrypt_cost_for_env(&environment);

        Self {
            environment,
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: 1,
            storage_backend: StorageBackend::Memory,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "photo_share".to_string(),
            jwt_secret: JwtConfig::DEFAULT_SECRET.to_string(),
            token_ttl_days: 30,
            bcrypt_cost,
            max_upload_bytes: 5 * 1024 * 1024,
            json_limit_bytes: 10 * 1024 * 1024,
            rate_limit_per_second: 100,
            rate_limit_burst_size: 200,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_development_friendly() {
        let config = AppConfig::default();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(config.token_ttl_days, 30);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8081,
            ..AppConfig::default()
        };

        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }
}
