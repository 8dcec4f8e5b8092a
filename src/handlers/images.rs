//! # Image HTTP Handlers
//!
//! 모든 엔드포인트는 `AuthMiddleware` 뒤에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/images` | 업로드 (`image` 파일, `title`, `description`) | 201 Created |
//! | `GET` | `/api/images` | 내 이미지 목록, 최신순 | 200 OK |
//! | `DELETE` | `/api/images/{id}` | 내 이미지 삭제 | 200 OK |

use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};

use crate::{
    core::{errors::AppError, registry::ServiceRegistry},
    domain::{
        dto::{images::request::UploadImageRequest, MessageResponse},
        models::auth::AuthenticatedUser,
    },
    handlers::{guards::is_multipart_content_type, multipart::read_multipart},
};

const IMAGE_FIELD: &str = "image";

/// 이미지 업로드
///
/// multipart가 아닌 본문은 파일이 없는 요청과 같이 400으로 처리됩니다.
///
/// ```bash
/// curl -X POST http://localhost:5000/api/images \
///   -H "Authorization: Bearer $TOKEN" \
///   -F title=Sunset -F image=@sunset.jpg
/// ```
#[post("")]
pub async fn upload_image(
    req: HttpRequest,
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let is_multipart = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(is_multipart_content_type)
        .unwrap_or(false);

    let request = if is_multipart {
        let form = read_multipart(payload, IMAGE_FIELD, registry.config().max_upload_bytes).await?;
        UploadImageRequest::from_parts(&form.fields, form.file)
    } else {
        UploadImageRequest::default()
    };

    let response = registry.image_service().upload(&user.user_id, request).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 내 이미지 목록
#[get("")]
pub async fn list_images(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let images = registry.image_service().list_by_owner(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(images))
}

/// 이미지 삭제
///
/// # Errors
///
/// * 404 - 없는 이미지 (`Image not found`)
/// * 403 - 다른 사용자의 이미지 (`Not authorized`)
#[delete("/{image_id}")]
pub async fn delete_image(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
    image_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    registry.image_service().delete(&image_id, &user.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Image deleted successfully")))
}
