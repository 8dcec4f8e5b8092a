//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결은 `main`에서 한 번 만들어 리포지토리에 명시적으로 전달됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::connect(&config.mongodb_uri, &config.database_name).await?);
//! let registry = ServiceRegistry::with_mongodb(config, database).await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 사용할 데이터베이스 이름을 함께 보관합니다.
/// `Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱해 클라이언트를 만들고, `ping` 명령으로
    /// 서버에 실제로 닿는지 확인한 뒤 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패 또는 서버 응답 없음
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("photo_share".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 확인 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    ///
    /// ```rust,ignore
    /// let images = database.get_database().collection::<Image>("images");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
