//! # 시간 포맷 유틸리티

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson;

/// BSON 시각을 `2024-01-01T12:00:00.000Z` 형태의 문자열로 변환합니다.
///
/// 밀리초 세 자리를 항상 포함하고 UTC는 `Z`로 표기합니다.
pub fn to_iso_string(value: &bson::DateTime) -> String {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 현재 시각을 같은 형식으로 반환합니다.
pub fn now_iso_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
