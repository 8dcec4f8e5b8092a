use serde::{Deserialize, Serialize};
use crate::domain::entities::images::Image;
use crate::utils::time_utils::to_iso_string;

/// 이미지 응답 DTO
///
/// ```json
/// {
///   "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
///   "title": "Sunset",
///   "description": "",
///   "imageUrl": "data:image/jpeg;base64,/9j/4AAQ...",
///   "createdAt": "2024-01-01T12:00:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_at: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id_string(),
            image_url: image.image_url(),
            created_at: to_iso_string(&image.created_at),
            title: image.title,
            description: image.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};
    use crate::domain::entities::StoredBlob;

    #[test]
    fn test_image_response_shape() {
        let mut image = Image::new(
            ObjectId::new(),
            "Sunset".to_string(),
            "Beach".to_string(),
            StoredBlob::new(b"jpg".to_vec(), "image/jpeg"),
        );
        image.created_at = DateTime::from_millis(1_704_110_400_123);
        let id = image.id_string();

        let json = serde_json::to_value(ImageResponse::from(image)).unwrap();

        assert_eq!(json["_id"], id);
        assert_eq!(json["title"], "Sunset");
        assert_eq!(json["description"], "Beach");
        assert_eq!(json["imageUrl"], "data:image/jpeg;base64,anBn");
        assert_eq!(json["createdAt"], "2024-01-01T12:00:00.123Z");
    }
}
