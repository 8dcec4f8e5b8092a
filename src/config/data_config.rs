//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 업로드, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그대로 사용하고,
    /// 아니면 환경별 기본값으로 대체합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| Self::parse_cost(&raw))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    fn parse_cost(raw: &str) -> Option<u32> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=15).contains(cost))
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 5000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// 기본값은 "0.0.0.0" (모든 인터페이스)입니다.
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수 (`SERVER_WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션에 저장
    MongoDb,
    /// 프로세스 메모리에 저장 (재시작 시 소실)
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// 데이터베이스 연결 설정
///
/// ## 환경 변수
/// - `STORAGE_BACKEND`: `mongodb` (기본값) 또는 `memory`
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "photo_share")
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn storage_backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|raw| StorageBackend::from_str(&raw))
            .unwrap_or(StorageBackend::MongoDb)
    }

    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "photo_share".to_string())
    }
}

/// 요청 본문 크기 제한 설정
pub struct UploadConfig;

impl UploadConfig {
    /// 업로드 파일 하나의 최대 크기 (`MAX_UPLOAD_BYTES`, 기본값 5MB)
    pub fn max_file_bytes() -> usize {
        env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(5 * 1024 * 1024)
    }

    /// JSON/폼 본문의 최대 크기 (`JSON_BODY_LIMIT_BYTES`, 기본값 10MB)
    pub fn json_limit_bytes() -> usize {
        env::var("JSON_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(10 * 1024 * 1024)
    }
}

/// Rate Limiting 설정
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 허용 요청 수 (기본값: 100)
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            })
    }

    /// 버스트 허용량 (기본값: 200)
    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            })
    }
}

/// CORS 허용 오리진 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS`를 쉼표로 나눈 목록. 기본값 `*` (모든 오리진)
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());
        Self::parse_origins(&raw)
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            vec!["*".to_string()]
        } else {
            origins
        }
    }
}
