//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고 응답을 만드는 핸들러들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Stores - 데이터 접근                          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 작성 규칙
//!
//! - 서비스는 `web::Data<ServiceRegistry>`에서 꺼내 씀
//! - 인증이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 추출자를 인자로 받음
//! - 반환 타입은 `Result<HttpResponse, AppError>`, 에러 응답 변환은 `AppError`가 담당
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn list_images(
//!     registry: web::Data<ServiceRegistry>,
//!     user: AuthenticatedUser,
//! ) -> Result<HttpResponse, AppError> {
//!     let images = registry.image_service().list_by_owner(&user.user_id).await?;
//!     Ok(HttpResponse::Ok().json(images))
//! }
//! ```

pub mod users;
pub mod images;
pub mod multipart;
pub mod guards;
