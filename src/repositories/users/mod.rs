//! 사용자 관련 리포지토리 모듈
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`](crate::repositories::UserStore) 구현입니다.

pub mod user_repo;

pub use user_repo::UserRepository;
