//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의하는 모듈입니다.
//! 엔티티를 그대로 노출하지 않고, 클라이언트와 약속한 형태로만 변환합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 회원가입, 로그인, 프로필
//! │   ├── request/
//! │   └── response/
//! ├── images/             # 업로드, 목록
//! │   ├── request/
//! │   └── response/
//! ├── uploads.rs          # multipart에서 읽어 들인 파일
//! └── common.rs           # 단순 메시지 응답
//! ```
//!
//! ## 응답 형식 규칙
//!
//! - 식별자는 `_id` 키로 내보냄
//! - 바이너리는 `data:<mime>;base64,...` 문자열로 내보냄
//! - 시각은 밀리초 정밀도의 ISO-8601 UTC 문자열
//! - 비밀번호 해시는 어떤 응답에도 포함되지 않음

pub mod users;
pub mod images;
pub mod uploads;
pub mod common;

pub use users::{LoginRequest, RegisterUserRequest, UserResponse};
pub use images::{ImageResponse, UploadImageRequest};
pub use uploads::UploadedFile;
pub use common::MessageResponse;
