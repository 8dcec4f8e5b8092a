//! # Domain Models Module
//!
//! 저장되지 않고 요청 처리 중에만 쓰이는 모델입니다.
//!
//! - [`auth`] - 요청에 부착되는 인증된 사용자 정보
//! - [`token`] - JWT 클레임

pub mod auth {
    pub mod authenticated_user;

    pub use authenticated_user::AuthenticatedUser;
}

pub mod token {
    pub mod token;

    pub use token::TokenClaims;
}
