//! 포토 공유 서비스 백엔드
//!
//! 사용자가 가입/로그인한 뒤 자신의 이미지를 올리고, 보고, 지우는 REST API입니다.
//! 이미지는 문서 안에 바이너리로 저장되고 base64 data URI로 응답됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입(프로필 사진 선택), 로그인, 프로필 조회
//! - **JWT 인증**: HS256 토큰, 30일 만료, 상태 없는 검증
//! - **이미지**: 업로드, 최신순 목록, 소유자만 삭제
//! - **저장소**: MongoDB 또는 프로세스 메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, multipart 읽기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (ServiceRegistry로 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / ImageStore 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use photo_share_backend::{config::AppConfig, core::registry::ServiceRegistry};
//!
//! let registry = ServiceRegistry::in_memory(AppConfig::default());
//! let user = registry.user_service().register(request, None).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
