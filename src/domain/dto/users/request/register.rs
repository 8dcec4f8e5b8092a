//! # 회원가입 요청 DTO
//!
//! JSON, urlencoded 폼, multipart 폼 어느 쪽으로 들어와도 같은 구조로 모입니다.
//! multipart의 경우 프로필 사진 파일은 이 구조체가 아니라
//! 서비스 호출 시 별도 인자로 전달됩니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 공백이 아닌 1자 이상
//! - `email`: RFC 5322 형식. 중복 여부는 서비스 계층에서 검사
//! - `password`: 1자 이상
//!
//! ```rust,ignore
//! use validator::Validate;
//!
//! let request = RegisterUserRequest {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! request.validate()?;
//! ```

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::is_valid_string;

/// 검증 메시지를 고를 때의 필드 우선순위
const FIELD_ORDER: [&str; 3] = ["name", "email", "password"];

/// 새 사용자 계정 생성을 위한 요청 DTO
///
/// 누락된 필드는 빈 문자열로 채워진 뒤 검증 단계에서 걸러집니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl RegisterUserRequest {
    /// multipart 텍스트 필드에서 요청을 구성합니다.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let field = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            name: field("name"),
            email: field("email"),
            password: field("password"),
        }
    }

    /// 검증 후 첫 번째 실패 메시지를 `ValidationError`로 돌려줍니다.
    ///
    /// 여러 필드가 동시에 실패하면 `name`, `email`, `password` 순으로 하나만 보고합니다.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| AppError::ValidationError(first_message(&errors)))
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
