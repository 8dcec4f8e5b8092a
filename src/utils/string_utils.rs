//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 선택적 문자열 필드에서 빈 값을 걸러냅니다
///
/// None 이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 그 외에는 원래 값을 그대로 돌려줍니다 (앞뒤 공백 유지).
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::non_blank;
///
/// assert_eq!(non_blank(Some("  Hello  ".to_string())), Some("  Hello  ".to_string()));
/// assert_eq!(non_blank(Some("   ".to_string())), None);
/// assert_eq!(non_blank(None), None);
/// ```
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| is_valid_string(s))
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 로그 출력용으로 이메일의 로컬 파트를 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
