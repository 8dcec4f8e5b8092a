//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "Alice".to_string(),
//!     "alice@example.com".to_string(),
//!     hashed_password,
//!     None,
//! );
//! ```

pub mod user;

pub use user::User;
