//! 이미지 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::UploadImageRequest;
pub use response::ImageResponse;
