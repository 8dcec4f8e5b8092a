//! # Core Module
//!
//! 애플리케이션 전반에서 쓰이는 기반 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 조립
//! - **ServiceRegistry**: 저장소와 서비스를 생성자 주입으로 묶은 컨테이너
//! - **저장소 선택**: MongoDB 또는 메모리 구현을 같은 트레이트 뒤에 연결
//! - **공유**: `web::Data<ServiceRegistry>`로 워커와 미들웨어에 전달
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **TokenError**: 토큰 검증 실패 원인
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::core::{errors::AppError, registry::ServiceRegistry};
//!
//! async fn list_images(
//!     registry: web::Data<ServiceRegistry>,
//!     user: AuthenticatedUser,
//! ) -> Result<HttpResponse, AppError> {
//!     let images = registry.image_service().list_by_owner(&user.user_id).await?;
//!     Ok(HttpResponse::Ok().json(images))
//! }
//! ```

pub mod registry;
pub mod errors;
