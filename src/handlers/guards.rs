//! Content-Type 기반 라우트 가드
//!
//! 같은 경로에 본문 형식별 핸들러를 나눠 등록할 때 사용합니다.
//! 가드가 맞지 않으면 라우터는 다음에 등록된 핸들러로 넘어갑니다.
//!
//! ```rust,ignore
//! #[post("", guard = "is_json")]
//! pub async fn register_json(payload: web::Json<RegisterUserRequest>) -> ... {}
//! ```

use actix_web::guard::GuardContext;
use actix_web::http::header;

/// multipart/form-data 요청인지 확인합니다.
pub fn is_multipart(ctx: &GuardContext) -> bool {
    content_type(ctx).is_some_and(|value| is_multipart_content_type(&value))
}

/// JSON 본문 요청인지 확인합니다.
pub fn is_json(ctx: &GuardContext) -> bool {
    content_type(ctx).is_some_and(|value| is_json_content_type(&value))
}

pub fn is_multipart_content_type(content_type: &str) -> bool {
    essence(content_type) == "multipart/form-data"
}

/// `application/json` 또는 `application/*+json`
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = essence(content_type);
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn content_type(ctx: &GuardContext) -> Option<String> {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// 파라미터를 뗀 소문자 MIME 타입
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
