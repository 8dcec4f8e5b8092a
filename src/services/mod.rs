//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트와 다른 서비스를 생성자로 전달받고,
//! [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 이들을 조립합니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, 프로필 조회
//! - JWT 토큰 발급과 검증
//! - 이미지 업로드, 목록, 소유자 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService, images::ImageService};
//!
//! let registry = web::Data::<ServiceRegistry>::extract(&req).await?;
//! let images = registry.image_service().list_by_owner(&user.user_id).await?;
//! ```

pub mod users;
pub mod auth;
pub mod images;
