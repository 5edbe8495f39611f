//! CLI 명령어 구현 모듈.
//!
//! 각 명령은 저장소 트레이트를 받아 결과 구조체를 반환하고,
//! 출력 문자열 생성은 `render_*` 함수가 담당합니다.

pub mod invest;
pub mod portfolio;
pub mod project;
pub mod recommend;
pub mod referral;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{Context, Result};
use serde::Serialize;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// JSON 형식 출력.
pub(crate) fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

/// 문자열 자르기 (UTF-8 안전).
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    // 문자 수로 계산 (바이트가 아님)
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
