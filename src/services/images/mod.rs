//! 이미지 서비스 모듈

pub mod image_service;

pub use image_service::ImageService;
