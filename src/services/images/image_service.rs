//! # 이미지 서비스 구현
//!
//! 업로드, 소유자별 목록, 소유권 확인 후 삭제를 담당합니다.
//!
//! ## 이미지 상태
//!
//! ```text
//! Existing ──(소유자의 delete)──▶ Deleted
//! ```
//!
//! 생성 이후 수정 경로는 없습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::images::{request::UploadImageRequest, response::ImageResponse},
        entities::{Image, Owned, StoredBlob, DEFAULT_IMAGE_TITLE},
    },
    repositories::ImageStore,
    utils::string_utils::non_blank,
};

const IMAGE_NOT_FOUND: &str = "Image not found";

/// 이미지 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let image_service = ImageService::new(image_store);
/// let uploaded = image_service.upload(&user.user_id, request).await?;
/// let mine = image_service.list_by_owner(&user.user_id).await?;
/// ```
pub struct ImageService {
    image_store: Arc<dyn ImageStore>,
}

impl ImageService {
    pub fn new(image_store: Arc<dyn ImageStore>) -> Self {
        Self { image_store }
    }

    /// 이미지 업로드
    ///
    /// # Arguments
    ///
    /// * `owner` - 인증된 업로드 사용자
    /// * `request` - 제목, 설명, 파일
    ///
    /// 제목이 없거나 공백뿐이면 `"Untitled"`, 설명이 없으면 빈 문자열로 저장합니다.
    /// 그 외의 제목은 앞뒤 공백까지 받은 그대로 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 파일이 없거나 0바이트 (`"No image file provided"`)
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn upload(&self, owner: &ObjectId, request: UploadImageRequest) -> AppResult<ImageResponse> {
        let file = request
            .file
            .filter(|file| !file.is_empty())
            .ok_or_else(|| AppError::ValidationError("No image file provided".to_string()))?;

        let title = non_blank(request.title)
            .unwrap_or_else(|| DEFAULT_IMAGE_TITLE.to_string());
        let description = request.description.unwrap_or_default();
        let size = file.len();

        let image = Image::new(*owner, title, description, StoredBlob::from(file));
        let saved = self.image_store.insert(image).await?;

        log::info!("🖼️ 이미지 업로드: {} (owner={}, {} bytes)", saved.id_string(), owner.to_hex(), size);

        Ok(ImageResponse::from(saved))
    }

    /// 소유자의 이미지 목록 (최신순)
    ///
    /// 이미지가 없으면 빈 목록을 반환합니다.
    pub async fn list_by_owner(&self, owner: &ObjectId) -> AppResult<Vec<ImageResponse>> {
        let images = self.image_store.list_by_owner(owner).await?;
        Ok(images.into_iter().map(ImageResponse::from).collect())
    }

    /// 이미지 삭제
    ///
    /// 소유권 확인은 삭제 전에 수행합니다. 확인 이후 다른 요청이 먼저
    /// 지웠다면 삭제 건수가 0이 되고 `NotFound`로 응답합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없는 이미지이거나 ID 형식이 잘못됨
    /// * `AppError::AuthorizationError` - 요청자가 소유자가 아님 (`"Not authorized"`)
    pub async fn delete(&self, image_id: &str, requester: &ObjectId) -> AppResult<()> {
        let id = ObjectId::parse_str(image_id)
            .map_err(|_| AppError::NotFound(IMAGE_NOT_FOUND.to_string()))?;

        let image = self.image_store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(IMAGE_NOT_FOUND.to_string()))?;

        if !image.is_owned_by(requester) {
            log::warn!(
                "🚫 다른 사용자의 이미지 삭제 시도: image={} owner={} requester={}",
                image_id,
                image.user_id.to_hex(),
                requester.to_hex()
            );
            return Err(AppError::AuthorizationError("Not authorized".to_string()));
        }

        if !self.image_store.delete_by_id(&id).await? {
            return Err(AppError::NotFound(IMAGE_NOT_FOUND.to_string()));
        }

        log::info!("🗑️ 이미지 삭제: {} (owner={})", image_id, requester.to_hex());
        Ok(())
    }
}
