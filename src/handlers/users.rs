//! # User HTTP Handlers
//!
//! 회원가입, 로그인, 프로필 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 회원가입 (multipart, JSON, urlencoded) | 201 Created |
//! | `POST` | `/api/users/login` | 로그인 | 200 OK |
//! | `GET` | `/api/users/profile` | 내 프로필 (Bearer 필요) | 200 OK |
//!
//! ## 회원가입 본문 형식
//!
//! 같은 경로에 본문 형식별 핸들러가 등록됩니다. multipart, JSON 순으로
//! Content-Type 가드를 확인하고, 둘 다 아니면 urlencoded 폼 핸들러가 받습니다.
//! 각 핸들러는 `JsonConfig`/`FormConfig`의 크기 제한과 에러 응답을 그대로 따릅니다.
//! 프로필 사진은 multipart의 `profilePicture` 파일 필드로만 받을 수 있습니다.
//!
//! ```bash
//! curl -X POST http://localhost:5000/api/users \
//!   -F name=Alice -F email=alice@example.com -F password=secret \
//!   -F profilePicture=@me.png
//!
//! curl -X POST http://localhost:5000/api/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Alice","email":"alice@example.com","password":"secret"}'
//! ```

use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};

use crate::{
    core::{errors::AppError, registry::ServiceRegistry},
    domain::{
        dto::{
            users::request::{LoginRequest, RegisterUserRequest},
            UploadedFile,
        },
        models::auth::AuthenticatedUser,
    },
    handlers::{
        guards::{is_json, is_multipart},
        multipart::read_multipart,
    },
};

/// multipart 회원가입에서 프로필 사진 파일 필드 이름
const PROFILE_PICTURE_FIELD: &str = "profilePicture";

/// 회원가입 (multipart/form-data)
///
/// # Errors
///
/// * 400 - 검증 실패 또는 이미 가입된 이메일
/// * 413 - 프로필 사진 용량 초과
#[post("", guard = "is_multipart")]
pub async fn register_multipart(
    registry: web::Data<ServiceRegistry>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_multipart(payload, PROFILE_PICTURE_FIELD, registry.config().max_upload_bytes).await?;
    let request = RegisterUserRequest::from_fields(&form.fields);

    register_user(&registry, request, form.file).await
}

/// 회원가입 (JSON, 프로필 사진 없음)
#[post("", guard = "is_json")]
pub async fn register_json(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    register_user(&registry, payload.into_inner(), None).await
}

/// 회원가입 (urlencoded 폼, 프로필 사진 없음)
///
/// 가드가 없으므로 다른 형식의 본문도 여기로 와서 400으로 응답됩니다.
#[post("")]
pub async fn register_form(
    registry: web::Data<ServiceRegistry>,
    payload: web::Form<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    register_user(&registry, payload.into_inner(), None).await
}

async fn register_user(
    registry: &ServiceRegistry,
    request: RegisterUserRequest,
    profile_picture: Option<UploadedFile>,
) -> Result<HttpResponse, AppError> {
    let response = registry.user_service().register(request, profile_picture).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 (JSON)
///
/// 성공하면 새 토큰이 담긴 사용자 정보를 돌려줍니다.
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"alice@example.com","password":"secret"}'
/// ```
#[post("/login", guard = "is_json")]
pub async fn login_json(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    login_user(&registry, payload.into_inner()).await
}

/// 로그인 (urlencoded 폼)
#[post("/login")]
pub async fn login_form(
    registry: web::Data<ServiceRegistry>,
    payload: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    login_user(&registry, payload.into_inner()).await
}

async fn login_user(registry: &ServiceRegistry, request: LoginRequest) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, password } = request;
    let response = registry.user_service().login(&email, &password).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 현재 사용자 프로필
#[get("")]
pub async fn get_profile(
    registry: web::Data<ServiceRegistry>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = registry.user_service().get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}
