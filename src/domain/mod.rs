//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities     - MongoDB에 저장되는 User, Image
//! ├── DTOs         - 요청/응답 데이터 구조
//! └── Models       - 인증된 사용자, JWT 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! use crate::domain::{entities::User, dto::{RegisterUserRequest, UserResponse}};
//!
//! // 1. DTO로 입력 받기 + 유효성 검증
//! request.validate()?;
//!
//! // 2. 도메인 엔티티 생성
//! let user = User::new(request.name, request.email, password_hash, None);
//!
//! // 3. 저장소를 통한 영속화
//! let saved = user_store.insert(user).await?;
//!
//! // 4. 응답 DTO로 변환
//! let response = UserResponse::from(saved).with_token(token);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Image, Owned, StoredBlob, User};
pub use models::auth::AuthenticatedUser;
pub use models::token::TokenClaims;
