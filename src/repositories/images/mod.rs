//! 이미지 리포지토리 모듈

pub mod image_repo;

pub use image_repo::ImageRepository;
