//! multipart 요청에서 읽어 들인 파일

/// 메모리에 모두 읽어 들인 업로드 파일
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    /// 클라이언트가 보낸 MIME 타입. 없으면 `application/octet-stream`
    pub content_type: String,
    pub file_name: Option<String>,
}

impl UploadedFile {
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
            file_name: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
