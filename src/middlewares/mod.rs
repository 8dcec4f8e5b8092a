//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 토큰의 사용자를 저장소에서 확인
//! - `AuthenticatedUser`를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! web::scope("/api/images")
//!     .wrap(AuthMiddleware::required())
//!     .service(list_images)
//! ```
//!
//! 미들웨어는 `web::Data<ServiceRegistry>`가 앱에 등록되어 있어야 동작합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
