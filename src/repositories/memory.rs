//! # 메모리 저장소
//!
//! 프로세스 메모리에 데이터를 보관하는 [`UserStore`] / [`ImageStore`] 구현입니다.
//! 통합 테스트와 `STORAGE_BACKEND=memory` 실행에서 사용하며, 재시작하면
//! 모든 데이터가 사라집니다.
//!
//! 각 연산은 하나의 `RwLock` 구간 안에서 끝나므로 MongoDB의 단일 문서
//! 원자성과 같은 보장을 가집니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::{Image, User},
    repositories::{ImageStore, UserStore, USER_EXISTS_MESSAGE},
};

fn read_lock<T>(lock: &RwLock<T>) -> AppResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| AppError::InternalError("In-memory store lock poisoned".to_string()))
}

fn write_lock<T>(lock: &RwLock<T>) -> AppResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| AppError::InternalError("In-memory store lock poisoned".to_string()))
}

/// 메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn name(&self) -> &'static str {
        "memory:users"
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = read_lock(&self.users)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = read_lock(&self.users)?;
        Ok(users.get(id).cloned())
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = write_lock(&self.users)?;

        // 유니크 인덱스와 동일한 검사
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// 메모리 이미지 저장소
#[derive(Default)]
pub struct InMemoryImageStore {
    images: RwLock<HashMap<ObjectId, Image>>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    fn name(&self) -> &'static str {
        "memory:images"
    }

    async fn insert(&self, image: Image) -> AppResult<Image> {
        let mut images = write_lock(&self.images)?;
        images.insert(image.id, image.clone());
        Ok(image)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Image>> {
        let images = read_lock(&self.images)?;
        Ok(images.get(id).cloned())
    }

    async fn list_by_owner(&self, owner: &ObjectId) -> AppResult<Vec<Image>> {
        let images = read_lock(&self.images)?;

        let mut owned: Vec<Image> = images
            .values()
            .filter(|image| image.user_id == *owner)
            .cloned()
            .collect();

        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(owned)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let mut images = write_lock(&self.images)?;
        Ok(images.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;
    use crate::domain::entities::StoredBlob;

    fn image_at(owner: ObjectId, title: &str, millis: i64) -> Image {
        let mut image = Image::new(
            owner,
            title.to_string(),
            String::new(),
            StoredBlob::new(vec![1, 2, 3], "image/png"),
        );
        image.created_at = DateTime::from_millis(millis);
        image
    }

    #[actix_web::test]
    async fn test_user_insert_rejects_duplicate_email() {
        let store = InMemoryUserStore::new();
        let first = User::new("A".into(), "a@example.com".into(), "hash".into(), None);
        let second = User::new("B".into(), "a@example.com".into(), "hash2".into(), None);

        store.insert(first.clone()).await.unwrap();
        let result = store.insert(second).await;

        assert!(matches!(result, Err(AppError::ConflictError(ref m)) if m == "User already exists"));

        let stored = store.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.name, "A");
    }

    #[actix_web::test]
    async fn test_user_find_by_id() {
        let store = InMemoryUserStore::new();
        let user = User::new("A".into(), "a@example.com".into(), "hash".into(), None);
        store.insert(user.clone()).await.unwrap();

        assert!(store.find_by_id(&user.id).await.unwrap().is_some());
        assert!(store.find_by_id(&ObjectId::new()).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_list_by_owner_newest_first() {
        let store = InMemoryImageStore::new();
        let owner = ObjectId::new();
        let other = ObjectId::new();

        store.insert(image_at(owner, "t1", 1_000)).await.unwrap();
        store.insert(image_at(owner, "t3", 3_000)).await.unwrap();
        store.insert(image_at(owner, "t2", 2_000)).await.unwrap();
        store.insert(image_at(other, "other", 4_000)).await.unwrap();

        let titles: Vec<String> = store
            .list_by_owner(&owner)
            .await
            .unwrap()
            .into_iter()
            .map(|image| image.title)
            .collect();

        assert_eq!(titles, vec!["t3", "t2", "t1"]);
    }

    #[actix_web::test]
    async fn test_list_ties_broken_by_id() {
        let store = InMemoryImageStore::new();
        let owner = ObjectId::new();

        let first = image_at(owner, "first", 5_000);
        let second = image_at(owner, "second", 5_000);
        store.insert(first).await.unwrap();
        store.insert(second).await.unwrap();

        let listed = store.list_by_owner(&owner).await.unwrap();
        assert_eq!(listed[0].title, "second");
        assert_eq!(listed[1].title, "first");
    }

    #[actix_web::test]
    async fn test_delete_by_id_only_once() {
        let store = InMemoryImageStore::new();
        let image = image_at(ObjectId::new(), "t", 1_000);
        store.insert(image.clone()).await.unwrap();

        assert!(store.delete_by_id(&image.id).await.unwrap());
        assert!(!store.delete_by_id(&image.id).await.unwrap());
        assert!(store.find_by_id(&image.id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_list_for_owner_without_images_is_empty() {
        let store = InMemoryImageStore::new();
        assert!(store.list_by_owner(&ObjectId::new()).await.unwrap().is_empty());
    }
}
