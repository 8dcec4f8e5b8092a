use serde::{Deserialize, Serialize};

/// 로그인 요청 DTO
///
/// 형식 검증 없음. 빈 값이나 잘못된 이메일도
/// 존재하지 않는 계정과 같은 401 응답으로 처리됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
