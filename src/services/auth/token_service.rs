//! JWT 토큰 관리 서비스 구현
//!
//! 사용자 ID를 담은 HS256 토큰을 발급하고 검증합니다.
//! 토큰은 저장하지 않으며, 만료 전에는 폐기할 수 없습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult, TokenError},
    domain::models::token::TokenClaims,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명 키와 토큰 수명을 보관합니다.
/// 시각을 인자로 받는 `issue_at` / `verify_at`은 만료 경계 테스트에 사용합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// # Arguments
    ///
    /// * `secret` - HMAC 서명 비밀키
    /// * `ttl_days` - 발급 시각부터 만료까지의 일 수
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// 토큰 수명 (일)
    pub fn ttl_days(&self) -> i64 {
        self.ttl.num_days()
    }

    /// 사용자를 위한 JWT 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue(&user.id)?;
    /// ```
    pub fn issue(&self, user_id: &ObjectId) -> AppResult<String> {
        self.issue_at(user_id, Utc::now())
    }

    /// 지정한 발급 시각으로 토큰을 생성합니다. `exp = iat + ttl`
    pub fn issue_at(&self, user_id: &ObjectId, now: DateTime<Utc>) -> AppResult<String> {
        let claims = TokenClaims {
            id: user_id.to_hex(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `TokenError::InvalidSignature` - 서명 불일치
    /// * `TokenError::Expired` - 현재 시각이 `exp` 이상
    /// * `TokenError::Malformed` - 토큰 구조 또는 클레임 해석 실패
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// 주어진 시각 기준으로 토큰을 검증합니다.
    ///
    /// 만료는 `now >= exp`일 때이며, 정확히 `iat + ttl` 시점의 토큰도 만료입니다.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료 판정은 아래에서 경계 포함으로 직접 수행
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `"Not authorized, no token"` - 헤더가 `Bearer`로 시작하지 않음
    /// * `"Not authorized, token missing"` - 공백 뒤 토큰 부분이 비어 있음
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.verify(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if !auth_header.starts_with("Bearer") {
            return Err(AppError::AuthenticationError("Not authorized, no token".to_string()));
        }

        match auth_header.split(' ').nth(1) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError("Not authorized, token missing".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 30)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service();
        let user_id = ObjectId::new();

        let token = service.issue(&user_id).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.id, user_id.to_hex());
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_token_expires_exactly_at_ttl() {
        let service = service();
        let issued_at = Utc::now();
        let token = service.issue_at(&ObjectId::new(), issued_at).unwrap();

        let just_before = issued_at + Duration::days(30) - Duration::seconds(1);
        assert!(service.verify_at(&token, just_before).is_ok());

        let boundary = issued_at + Duration::days(30);
        assert_eq!(service.verify_at(&token, boundary), Err(TokenError::Expired));
    }

    #[test]
    fn test_other_secret_is_invalid_signature() {
        let token = service().issue(&ObjectId::new()).unwrap();
        let other = TokenService::new("another-secret", 30);

        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(service().verify("not.a.token"), Err(TokenError::Malformed));
        assert_eq!(service().verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tokens_identify_their_own_user() {
        let service = service();
        let alice = ObjectId::new();
        let bob = ObjectId::new();

        let alice_claims = service.verify(&service.issue(&alice).unwrap()).unwrap();
        let bob_claims = service.verify(&service.issue(&bob).unwrap()).unwrap();

        assert_eq!(alice_claims.id, alice.to_hex());
        assert_ne!(alice_claims.id, bob_claims.id);
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc").unwrap(), "abc");

        let no_scheme = service.extract_bearer_token("Basic abc").unwrap_err();
        assert_eq!(no_scheme.message(), "Not authorized, no token");

        let missing = service.extract_bearer_token("Bearer").unwrap_err();
        assert_eq!(missing.message(), "Not authorized, token missing");

        let empty = service.extract_bearer_token("Bearer ").unwrap_err();
        assert_eq!(empty.message(), "Not authorized, token missing");
    }
}
