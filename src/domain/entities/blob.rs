//! 레코드에 함께 저장되는 바이너리 파일
//!
//! 프로필 사진과 업로드 이미지는 별도 파일 저장소 없이
//! `{ data: BinData, contentType }` 형태로 문서 안에 그대로 들어갑니다.

use base64::{Engine, engine::general_purpose::STANDARD};
use mongodb::bson::{Binary, spec::BinarySubtype};
use serde::{Deserialize, Serialize};
use crate::domain::dto::UploadedFile;

/// 문서에 내장되는 파일 데이터와 MIME 타입
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBlob {
    /// 원본 바이트. 과거 데이터에는 빈 객체만 남아 있을 수 있음
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Binary>,
    #[serde(default)]
    pub content_type: String,
}

impl StoredBlob {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data: Some(Binary {
                subtype: BinarySubtype::Generic,
                bytes,
            }),
            content_type: content_type.into(),
        }
    }

    /// 저장된 바이트. 비어 있으면 `None`
    pub fn bytes(&self) -> Option<&[u8]> {
        self.data
            .as_ref()
            .map(|binary| binary.bytes.as_slice())
            .filter(|bytes| !bytes.is_empty())
    }

    /// `data:<mime>;base64,<payload>` 형태의 data URI로 변환합니다.
    ///
    /// 바이트가 없으면 `None`을 반환합니다.
    ///
    /// ```rust,ignore
    /// let blob = StoredBlob::new(vec![0x89, 0x50], "image/png");
    /// assert_eq!(blob.to_data_uri().unwrap(), "data:image/png;base64,iVA=");
    /// ```
    pub fn to_data_uri(&self) -> Option<String> {
        self.bytes()
            .map(|bytes| format!("data:{};base64,{}", self.content_type, STANDARD.encode(bytes)))
    }
}

impl From<UploadedFile> for StoredBlob {
    fn from(file: UploadedFile) -> Self {
        Self::new(file.data, file.content_type)
    }
}
