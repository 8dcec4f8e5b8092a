//! multipart/form-data 본문 읽기
//!
//! 텍스트 필드는 문자열 맵으로, 지정한 이름의 파일 필드는 [`UploadedFile`]로 모읍니다.
//! 파일 크기 제한은 청크를 받는 도중에 검사하므로 초과분을 메모리에 쌓지 않습니다.

use std::collections::HashMap;

use actix_multipart::{Field, Multipart, MultipartError};
use futures_util::TryStreamExt;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::UploadedFile;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
/// 텍스트 필드 하나의 최대 크기
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// multipart 본문에서 읽어 낸 값들
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

/// multipart 본문 전체를 읽습니다.
///
/// # Arguments
///
/// * `payload` - actix-multipart 스트림
/// * `file_field` - 파일로 받을 필드 이름 (`image`, `profilePicture`)
/// * `max_file_bytes` - 파일 최대 크기
///
/// 같은 이름의 파일이 여러 개면 첫 번째만 사용합니다.
/// 파일 이름이 없는 파트는 텍스트 필드로 취급합니다.
///
/// # Errors
///
/// * `AppError::PayloadTooLarge` - 파일 또는 텍스트 필드 크기 초과
/// * `AppError::ValidationError` - multipart 형식 오류
pub async fn read_multipart(
    mut payload: Multipart,
    file_field: &str,
    max_file_bytes: usize,
) -> AppResult<MultipartForm> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(invalid_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        match file_name {
            Some(file_name) if name == file_field => {
                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
                let data = read_field(&mut field, max_file_bytes, "File too large").await?;

                if form.file.is_none() {
                    form.file = Some(UploadedFile {
                        data,
                        content_type,
                        file_name: Some(file_name),
                    });
                }
            }
            Some(_) => {
                // 다른 이름의 파일 파트는 버림
                read_field(&mut field, max_file_bytes, "File too large").await?;
            }
            None => {
                let raw = read_field(&mut field, MAX_TEXT_FIELD_BYTES, "Field too large").await?;
                form.fields.insert(name, String::from_utf8_lossy(&raw).into_owned());
            }
        }
    }

    Ok(form)
}

async fn read_field(field: &mut Field, limit: usize, too_large: &str) -> AppResult<Vec<u8>> {
    let mut data = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(invalid_multipart)? {
        if data.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(too_large.to_string()));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}

fn invalid_multipart(err: MultipartError) -> AppError {
    AppError::ValidationError(format!("Invalid multipart body: {}", err))
}
