//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 인증과 선택적인 프로필 사진을 가집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::blob::StoredBlob;

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 하나에 대응합니다.
/// 필드 이름은 camelCase로 저장되어 기존 데이터와 호환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시. 평문 비밀번호는 저장하지 않음
    pub password: String,
    /// 프로필 사진 (선택)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<StoredBlob>,
    /// 생성 시간
    #[serde(default = "DateTime::now")]
    pub created_at: DateTime,
    /// 수정 시간
    #[serde(default = "DateTime::now")]
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID는 저장 전에 클라이언트 쪽에서 발급합니다.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        profile_picture: Option<StoredBlob>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            name,
            email,
            password: password_hash,
            profile_picture,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// 프로필 사진의 data URI. 사진이 없으면 빈 문자열
    pub fn profile_picture_uri(&self) -> String {
        self.profile_picture
            .as_ref()
            .and_then(StoredBlob::to_data_uri)
            .unwrap_or_default()
    }
}
