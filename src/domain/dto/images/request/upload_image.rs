use std::collections::HashMap;
use crate::domain::dto::UploadedFile;

/// 이미지 업로드 요청
///
/// multipart 폼의 `title`, `description` 텍스트 필드와 `image` 파일 필드를 모은 것입니다.
/// 파일 유무는 서비스 계층에서 검사합니다.
#[derive(Debug, Clone, Default)]
pub struct UploadImageRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<UploadedFile>,
}

impl UploadImageRequest {
    pub fn from_parts(fields: &HashMap<String, String>, file: Option<UploadedFile>) -> Self {
        Self {
            title: fields.get("title").cloned(),
            description: fields.get("description").cloned(),
            file,
        }
    }
}
