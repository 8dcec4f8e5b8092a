//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **명시적 의존성**: 생성 시 [`Database`]를 전달받음
//! - **데이터 무결성**: `email` 유니크 인덱스와 중복 키 에러(11000) 변환

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::User,
    repositories::{UserStore, USER_EXISTS_MESSAGE},
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ### 컬렉션
/// - **컬렉션명**: `users`
/// - **인덱스**: `email` (unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone());
/// repo.create_indexes().await?;
///
/// let created = repo.insert(User::new(name, email, hash, None)).await?;
/// let found = repo.find_by_email(&created.email).await?;
/// ```
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** - 필드 `email`, 동시 가입 시 중복 방지
    ///
    /// # 주의사항
    ///
    /// - 이미 중복 이메일이 있는 컬렉션에서는 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 중복 키 쓰기 에러인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    fn name(&self) -> &'static str {
        COLLECTION_NAME
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// 서비스 계층의 사전 중복 확인과 별개로, 동시에 들어온 가입 요청은
    /// 유니크 인덱스가 막고 그 에러를 `ConflictError`로 변환합니다.
    async fn insert(&self, user: User) -> AppResult<User> {
        match self.collection().insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()))
            }
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }
}
