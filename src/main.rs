//! 포토 공유 서비스 메인 애플리케이션
//!
//! 설정을 읽고, 저장소를 연결해 `ServiceRegistry`를 만든 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use photo_share_backend::config::{AppConfig, StorageBackend};
use photo_share_backend::core::registry::ServiceRegistry;
use photo_share_backend::db::Database;
use photo_share_backend::routes::{configure_all_routes, configure_body_limits, not_found};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 포토 공유 서비스 시작중...");

    let config = AppConfig::from_env();
    let registry = build_registry(config).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(registry).await
}

/// 설정된 저장소 백엔드로 서비스 레지스트리를 만듭니다
///
/// # Errors
///
/// * `io::Error` - MongoDB 연결 또는 인덱스 생성 실패
async fn build_registry(config: AppConfig) -> io::Result<ServiceRegistry> {
    match config.storage_backend {
        StorageBackend::Memory => {
            info!("🧪 메모리 저장소 사용 (재시작 시 데이터 소실)");
            Ok(ServiceRegistry::in_memory(config))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&config.mongodb_uri, &config.database_name)
                .await
                .map_err(|e| {
                    error!("데이터베이스 연결 실패: {}", e);
                    io::Error::other(e.to_string())
                })?;

            ServiceRegistry::with_mongodb(config, Arc::new(database))
                .await
                .map_err(|e| {
                    error!("서비스 초기화 실패: {}", e);
                    io::Error::other(e.to_string())
                })
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(registry: ServiceRegistry) -> io::Result<()> {
    let config = registry.config().clone();
    let bind_address = config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/health", bind_address);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit_per_second)
        .burst_size(config.rate_limit_burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit_per_second,
        config.rate_limit_burst_size
    );

    let registry = web::Data::new(registry);
    let workers = config.workers;
    let json_limit = config.json_limit_bytes;
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            // 마지막에 등록한 wrap이 가장 바깥에서 실행됨
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(configure_cors(&origins))
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // 라우트 설정
            .configure(configure_body_limits(json_limit))
            .configure(configure_all_routes)
            .default_service(web::to(not_found))
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 표준 출력 사용
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match result {
        Ok(file) => println!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => println!("Current profile: {} (설정 파일 없음: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=photo_share_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `*`가 포함되어 있으면 모든 Origin을 허용합니다.
///
/// ```bash
/// CORS_ALLOWED_ORIGINS="http://localhost:3000,https://photos.example.com"
/// ```
fn configure_cors(origins: &[String]) -> Cors {
    let cors = if origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
