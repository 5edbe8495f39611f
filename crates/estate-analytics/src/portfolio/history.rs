//! 손익 추이 근사 곡선.
//!
//! 거래 원장이 없기 때문에 실제 이력이 아니라 현재 손익을 구간 수로 나눈 선형 보간입니다:
//!
//! ```text
//! profit_so_far(i) = Σ (position.profit / buckets) × i,   i = 1..=buckets
//! ```
//!
//! 마지막 구간의 값은 현재 총손익과 같습니다.

use estate_core::{Money, Position};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregator::PortfolioAggregator;

/// 손익 추이의 한 구간.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitHistoryPoint {
    /// 구간 번호 (1부터 시작)
    pub bucket_index: u32,
    /// 해당 구간까지의 누적 손익
    pub profit_so_far: Money,
}

impl PortfolioAggregator {
    /// 누적 손익 추이 곡선을 만듭니다.
    ///
    /// `buckets`가 0이면 빈 목록을 반환합니다.
    pub fn profit_history(&self, positions: &[Position], buckets: u32) -> Vec<ProfitHistoryPoint> {
        if buckets == 0 {
            return Vec::new();
        }

        let divisor = Decimal::from(buckets);
        let per_bucket: Money = positions.iter().map(|p| p.profit() / divisor).sum();

        (1..=buckets)
            .map(|bucket_index| ProfitHistoryPoint {
                bucket_index,
                profit_so_far: per_bucket * Decimal::from(bucket_index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_linear_history() {
        let positions = vec![
            Position::from_parts("i1", "u1", "p1", dec!(500000), dec!(567000)).unwrap(),
            Position::from_parts("i2", "u1", "p2", dec!(1000000), dec!(1180000)).unwrap(),
        ];

        let history = PortfolioAggregator::new().profit_history(&positions, 6);
        assert_eq!(history.len(), 6);
        assert_eq!(history[0].bucket_index, 1);
        assert_eq!(history[0].profit_so_far.round_dp(2), dec!(41166.67));
        assert_eq!(history[5].profit_so_far.round_dp(2), dec!(247000));
    }

    #[test]
    fn test_zero_buckets_and_empty_positions() {
        let aggregator = PortfolioAggregator::new();
        assert!(aggregator.profit_history(&[], 0).is_empty());

        let flat = aggregator.profit_history(&[], 3);
        assert_eq!(flat.len(), 3);
        assert!(flat.iter().all(|p| p.profit_so_far == Decimal::ZERO));
    }
}
