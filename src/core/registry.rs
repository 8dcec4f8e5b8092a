//! # Service Registry - 명시적 의존성 조립
//!
//! 저장소와 서비스를 한 곳에서 생성해 묶어 두는 컨테이너입니다.
//! `main`(또는 테스트)에서 한 번 만들고 `web::Data<ServiceRegistry>`로
//! 모든 워커와 미들웨어가 공유합니다. 전역 상태는 없습니다.
//!
//! ## 조립 순서
//!
//! ```text
//! 1. Stores    ── UserStore, ImageStore (MongoDB 또는 메모리)
//!                   │
//! 2. Services  ── TokenService ─┐
//!                UserService ◀──┤ (UserStore + TokenService)
//!                ImageService ◀─┘ (ImageStore)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! // 운영: MongoDB
//! let database = Arc::new(Database::connect(&config.mongodb_uri, &config.database_name).await?);
//! let registry = ServiceRegistry::with_mongodb(config, database).await?;
//!
//! // 테스트: 메모리 저장소
//! let registry = ServiceRegistry::in_memory(AppConfig::default());
//!
//! App::new().app_data(web::Data::new(registry))
//! ```

use std::sync::Arc;

use crate::{
    config::AppConfig,
    core::errors::AppResult,
    db::Database,
    repositories::{
        ImageRepository, ImageStore, InMemoryImageStore, InMemoryUserStore, UserRepository,
        UserStore,
    },
    services::{auth::TokenService, images::ImageService, users::UserService},
    utils::display_terminal::{
        print_boxed_title, print_final_summary, print_step_complete, print_step_start,
        print_sub_task,
    },
};

/// 애플리케이션 서비스 컨테이너
///
/// 내부 필드는 모두 `Arc`라서 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    config: Arc<AppConfig>,
    token_service: Arc<TokenService>,
    user_service: Arc<UserService>,
    image_service: Arc<ImageService>,
}

impl ServiceRegistry {
    /// 주어진 저장소 위에 서비스를 조립합니다.
    ///
    /// # Arguments
    ///
    /// * `config` - 시작 시점 설정 스냅샷
    /// * `user_store` - 사용자 저장소 구현
    /// * `image_store` - 이미지 저장소 구현
    pub fn new(
        config: AppConfig,
        user_store: Arc<dyn UserStore>,
        image_store: Arc<dyn ImageStore>,
    ) -> Self {
        print_step_start(2, "Creating services");

        let token_service = Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl_days));
        print_sub_task("TokenService", &format!("HS256, ttl {}d", token_service.ttl_days()));

        let user_service = Arc::new(UserService::new(
            user_store,
            token_service.clone(),
            config.bcrypt_cost,
        ));
        print_sub_task("UserService", &format!("bcrypt cost {}", config.bcrypt_cost));

        let image_service = Arc::new(ImageService::new(image_store));
        print_sub_task("ImageService", "✓ Created");

        print_step_complete(2, "Services created", 3);

        Self {
            config: Arc::new(config),
            token_service,
            user_service,
            image_service,
        }
    }

    /// MongoDB 저장소로 레지스트리를 만듭니다.
    ///
    /// 컬렉션 인덱스도 이 시점에 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 인덱스 생성 실패
    pub async fn with_mongodb(config: AppConfig, database: Arc<Database>) -> AppResult<Self> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");
        print_step_start(1, "Preparing MongoDB stores");

        let user_repo = UserRepository::new(database.clone());
        user_repo.create_indexes().await?;
        print_sub_task("UserStore", &format!("{}.{}", database.database_name(), user_repo.name()));

        let image_repo = ImageRepository::new(database.clone());
        image_repo.create_indexes().await?;
        print_sub_task("ImageStore", &format!("{}.{}", database.database_name(), image_repo.name()));

        print_step_complete(1, "Stores ready", 2);

        let registry = Self::new(config, Arc::new(user_repo), Arc::new(image_repo));
        print_final_summary("MongoDB", 2, 3);

        Ok(registry)
    }

    /// 프로세스 메모리 저장소로 레지스트리를 만듭니다.
    pub fn in_memory(config: AppConfig) -> Self {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");
        print_step_start(1, "Preparing in-memory stores");

        let user_store = InMemoryUserStore::new();
        print_sub_task("UserStore", user_store.name());
        let image_store = InMemoryImageStore::new();
        print_sub_task("ImageStore", image_store.name());

        print_step_complete(1, "Stores ready", 2);

        let registry = Self::new(config, Arc::new(user_store), Arc::new(image_store));
        print_final_summary("In-memory", 2, 3);

        registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }

    pub fn image_service(&self) -> &ImageService {
        &self.image_service
    }
}
