pub mod image_response;

pub use image_response::ImageResponse;
