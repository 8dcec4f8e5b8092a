//! 인증 서비스 모듈
//!
//! JWT 기반 토큰 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 만료 시각 경계 포함 검사 (`now >= exp`이면 만료)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(&config.jwt_secret, config.token_ttl_days);
//! let token = token_service.issue(&user.id)?;
//! ```

pub mod token_service;

pub use token_service::TokenService;
