//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 [`UserStore`] / [`ImageStore`] 트레이트에만
//! 의존합니다. 구현체는 두 가지입니다.
//!
//! - MongoDB 구현 ([`users::UserRepository`], [`images::ImageRepository`])
//! - 프로세스 내 메모리 구현 ([`memory`]), 테스트와 `STORAGE_BACKEND=memory`용
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{UserStore, memory::InMemoryUserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod images;
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::{Image, User};

pub use images::ImageRepository;
pub use memory::{InMemoryImageStore, InMemoryUserStore};
pub use users::UserRepository;

/// 사용자 저장소
///
/// 이메일은 저장소 전체에서 유일해야 합니다. 구현체는 중복 이메일 삽입 시
/// `AppError::ConflictError("User already exists")`를 반환해야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자 컬렉션/테이블 이름 (시작 로그용)
    fn name(&self) -> &'static str;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 저장된 사용자를 그대로 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;
}

/// 이미지 저장소
#[async_trait]
pub trait ImageStore: Send + Sync {
    fn name(&self) -> &'static str;

    async fn insert(&self, image: Image) -> AppResult<Image>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Image>>;

    /// 소유자의 이미지를 `createdAt` 내림차순, 같은 시각이면 `_id` 내림차순으로 반환
    async fn list_by_owner(&self, owner: &ObjectId) -> AppResult<Vec<Image>>;

    /// ID로 단일 문서를 원자적으로 삭제합니다.
    ///
    /// 실제로 삭제된 문서가 있으면 `true`
    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool>;
}

/// 중복 이메일로 인한 충돌 메시지
pub(crate) const USER_EXISTS_MESSAGE: &str = "User already exists";
