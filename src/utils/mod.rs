//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 로그용 마스킹
//! - [`time_utils`] - ISO-8601 시각 포맷
//! - [`display_terminal`] - 시작 시 터미널 출력 포맷팅

pub mod string_utils;
pub mod time_utils;
pub mod display_terminal;
