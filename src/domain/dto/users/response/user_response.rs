use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 회원가입/로그인 응답에는 `token`이 포함되고, 프로필 조회에는 빠집니다.
///
/// ```json
/// {
///   "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
///   "name": "Alice",
///   "email": "alice@example.com",
///   "profilePicture": "data:image/png;base64,iVBORw0...",
///   "token": "eyJhbGciOiJIUzI1NiIs..."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// data URI, 사진이 없으면 빈 문자열
    pub profile_picture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    /// 토큰을 포함한 응답으로 변환
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let profile_picture = user.profile_picture_uri();

        Self {
            id: user.id_string(),
            name: user.name,
            email: user.email,
            profile_picture,
            token: None,
        }
    }
}
