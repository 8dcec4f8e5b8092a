//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고,
//! 토큰의 사용자를 저장소에서 찾아 요청 extension에 붙입니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 감싼 라우트는 모두 인증이 필요합니다. 실패 시 핸들러는 호출되지 않고
/// `{"message": ...}` 본문의 401(저장소 오류는 500)이 바로 반환됩니다.
///
/// | 상황 | 응답 |
/// |------|------|
/// | 헤더 없음 / `Bearer`로 시작하지 않음 | 401 `Not authorized, no token` |
/// | `Bearer` 뒤 토큰 없음 | 401 `Not authorized, token missing` |
/// | 서명 불일치 / 해석 불가 | 401 `Invalid token` |
/// | 만료 | 401 `Token expired` |
/// | 토큰의 사용자가 없음 | 401 `User not found` |
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use mongodb::bson::oid::ObjectId;
    use crate::{
        config::AppConfig,
        core::registry::ServiceRegistry,
        domain::{dto::RegisterUserRequest, models::auth::AuthenticatedUser},
    };

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    fn registry() -> ServiceRegistry {
        ServiceRegistry::in_memory(AppConfig::default())
    }

    async fn register(registry: &ServiceRegistry, email: &str) -> String {
        let request = RegisterUserRequest {
            name: "Tester".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        };
        let response = registry.user_service().register(request, None).await.unwrap();
        response.token.unwrap()
    }

    async fn call(registry: ServiceRegistry, header: Option<String>) -> (u16, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(registry))
                .service(
                    web::scope("/protected")
                        .wrap(AuthMiddleware::required())
                        .route("", web::get().to(whoami)),
                ),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/protected");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let registry = registry();
        let token = register(&registry, "alice@example.com").await;

        let (status, body) = call(registry, Some(format!("Bearer {}", token))).await;

        assert_eq!(status, 200);
        assert_eq!(body, "alice@example.com");
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let (status, body) = call(registry(), None).await;

        assert_eq!(status, 401);
        assert!(body.contains("Not authorized, no token"));
    }

    #[actix_web::test]
    async fn test_wrong_scheme_and_empty_token() {
        let (status, body) = call(registry(), Some("Token abc".to_string())).await;
        assert_eq!(status, 401);
        assert!(body.contains("Not authorized, no token"));

        let (status, body) = call(registry(), Some("Bearer ".to_string())).await;
        assert_eq!(status, 401);
        assert!(body.contains("Not authorized, token missing"));
    }

    #[actix_web::test]
    async fn test_forged_token_is_invalid() {
        let registry = registry();
        let forged = crate::services::auth::TokenService::new("other-secret", 30)
            .issue(&ObjectId::new())
            .unwrap();

        let (status, body) = call(registry, Some(format!("Bearer {}", forged))).await;

        assert_eq!(status, 401);
        assert!(body.contains("Invalid token"));
    }

    #[actix_web::test]
    async fn test_expired_token() {
        let registry = registry();
        let issued = chrono::Utc::now() - chrono::Duration::days(31);
        let expired = registry.token_service().issue_at(&ObjectId::new(), issued).unwrap();

        let (status, body) = call(registry, Some(format!("Bearer {}", expired))).await;

        assert_eq!(status, 401);
        assert!(body.contains("Token expired"));
    }

    #[actix_web::test]
    async fn test_token_for_unknown_user() {
        let registry = registry();
        let orphan = registry.token_service().issue(&ObjectId::new()).unwrap();

        let (status, body) = call(registry, Some(format!("Bearer {}", orphan))).await;

        assert_eq!(status, 401);
        assert!(body.contains("User not found"));
    }
}
