//! Images Entity Module

pub mod image;

pub use image::{Image, DEFAULT_IMAGE_TITLE};
