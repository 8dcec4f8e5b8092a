//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 만료 정책을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_DAYS="30"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰은 HS256으로 서명되며 발급 시점으로부터 일 단위 만료 기간을 가집니다.
/// 갱신 토큰은 없으므로 만료된 사용자는 다시 로그인해야 합니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .unwrap_or_else(|| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Self::DEFAULT_SECRET.to_string()
            })
    }

    /// 토큰 만료 기간을 일 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 30일
    pub fn expiration_days() -> i64 {
        env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(30)
    }

    pub(crate) const DEFAULT_SECRET: &'static str = "your-secret-key";
}
