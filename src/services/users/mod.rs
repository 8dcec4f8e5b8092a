//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, 프로필 조회를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//! - 로그인 실패 메시지 통일
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let response = user_service.login(&request.email, &request.password).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
