//! # Domain Entities
//!
//! 저장소에 영속화되는 도메인 엔티티 모음입니다.
//!
//! - [`users`] - 사용자 계정
//! - [`images`] - 업로드된 이미지
//! - [`blob`] - 문서에 내장되는 파일 데이터

use mongodb::bson::oid::ObjectId;

pub mod blob;
pub mod users;
pub mod images;

pub use blob::StoredBlob;
pub use users::User;
pub use images::{Image, DEFAULT_IMAGE_TITLE};

/// 소유자 필드를 가진 엔티티
///
/// 삭제 같은 소유자 전용 작업 전에 `is_owned_by`로 확인합니다.
pub trait Owned {
    fn owner_id(&self) -> &ObjectId;

    fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        self.owner_id() == user_id
    }
}
