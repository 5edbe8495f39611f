//! 투자자-물건 추천 결과.

use serde::{Deserialize, Serialize};

use super::property::InvestmentStrategy;
use crate::types::Percentage;

/// 투자자에게 적합한 물건 추천.
///
/// 파생 값이며 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub investor_id: String,
    pub property_id: String,
    /// 적합도 점수 (0~100)
    pub match_score: u8,
    /// 실제로 적용된 가점 규칙의 설명 (평가 순서)
    pub reasons: Vec<String>,
    /// 물건의 대표 전략
    pub strategy: InvestmentStrategy,
    /// 예상 수익률 (%)
    pub projected_return: Percentage,
}
