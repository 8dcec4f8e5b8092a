use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use crate::core::errors::AppError;
use crate::domain::entities::users::User;

/// 인증 미들웨어가 토큰을 검증하고 저장소에서 찾아낸 사용자
///
/// 비밀번호 해시와 프로필 사진 바이트는 담지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,
    pub name: String,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn id_string(&self) -> String {
        self.user_id.to_hex()
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`로 감싸지 않은 라우트에서 사용하면 401을 돌려줍니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Not authorized, no token".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let user = User::new("Alice".into(), "alice@example.com".into(), "hash".into(), None);
        let identity = AuthenticatedUser::from(&user);

        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(identity.clone());

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted, identity);
        assert_eq!(extracted.id_string(), user.id_string());
    }

    #[actix_web::test]
    async fn test_missing_identity_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let err = AuthenticatedUser::extract(&req).await.unwrap_err();

        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }
}
