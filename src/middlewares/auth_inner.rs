//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceRegistry;
use crate::domain::models::auth::AuthenticatedUser;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req).await {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.id_string());
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    if matches!(err, AppError::AuthenticationError(_)) {
                        log::warn!("🔒 인증 실패 {} {}: {}", req.method(), req.path(), err.message());
                    }
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Bearer 토큰을 검증하고 저장소에서 사용자를 찾습니다.
async fn authenticate(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let registry = req
        .app_data::<web::Data<ServiceRegistry>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("ServiceRegistry가 등록되지 않았습니다".to_string()))?;

    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Not authorized, no token".to_string()))?;

    let token = registry.token_service().extract_bearer_token(auth_header)?;
    let claims = registry.token_service().verify(token)?;

    registry
        .user_service()
        .resolve_identity(&claims.id)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))
}
