//! JWT 클레임 구조체
//!
//! 기존 클라이언트가 가진 토큰과 호환되도록 사용자 ID를 `id` 클레임에 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `id`: 사용자 ID (ObjectId 16진수 문자열)
/// - `iat`: 토큰 발급 시간 (Unix timestamp, 초)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub id: String,
    /// 토큰 발급 시간
    pub iat: i64,
    /// 토큰 만료 시간
    pub exp: i64,
}
