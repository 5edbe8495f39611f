//! 브로커 대시보드 통계.

use estate_core::{DecimalExt, Investor, InvestorStage, Money, Percentage, Property, PropertyStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 물건 카탈로그 통계.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_properties: usize,
    pub active_properties: usize,
    /// 모집된 투자금 합계
    pub total_investment_raised: Money,
    /// 평균 기대 수익률 (%)
    pub average_expected_return: Percentage,
}

impl CatalogStats {
    /// 카탈로그 통계를 계산합니다. `broker_id`가 있으면 해당 브로커의 물건만 집계합니다.
    pub fn from_properties(properties: &[Property], broker_id: Option<&str>) -> Self {
        let selected: Vec<&Property> = properties
            .iter()
            .filter(|p| broker_id.map_or(true, |id| p.broker_id == id))
            .collect();

        let total_return: Percentage = selected.iter().map(|p| p.investment.expected_return).sum();

        Self {
            total_properties: selected.len(),
            active_properties: selected
                .iter()
                .filter(|p| p.status == PropertyStatus::Active)
                .count(),
            total_investment_raised: selected
                .iter()
                .map(|p| p.investment.current_investment)
                .sum(),
            average_expected_return: total_return.ratio_or_zero(Decimal::from(selected.len())),
        }
    }
}

/// 퍼널 단계별 투자자 수.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStageCount {
    pub stage: InvestorStage,
    pub count: usize,
}

/// 세일즈 퍼널 통계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStats {
    /// 퍼널 순서대로 모든 단계를 포함 (빈 단계는 0)
    pub stages: Vec<FunnelStageCount>,
    pub total: usize,
}

impl FunnelStats {
    pub fn from_investors(investors: &[Investor]) -> Self {
        let stages = InvestorStage::ALL
            .iter()
            .map(|&stage| FunnelStageCount {
                stage,
                count: investors.iter().filter(|i| i.stage == stage).count(),
            })
            .collect();

        Self {
            stages,
            total: investors.len(),
        }
    }

    pub fn count(&self, stage: InvestorStage) -> usize {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map_or(0, |s| s.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::{InvestorProfile, RiskLevel};
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_catalog() {
        let stats = CatalogStats::from_properties(&[], None);
        assert_eq!(stats.total_properties, 0);
        assert_eq!(stats.average_expected_return, Decimal::ZERO);
    }

    #[test]
    fn test_funnel_counts_in_stage_order() {
        let profile = InvestorProfile::new(dec!(1000000), RiskLevel::Low);
        let mut a = Investor::lead("a", "b1", "A", profile.clone());
        let b = Investor::lead("b", "b1", "B", profile.clone());
        let mut c = Investor::lead("c", "b1", "C", profile);
        a.move_to_stage(InvestorStage::Negotiation);
        c.move_to_stage(InvestorStage::Negotiation);

        let funnel = FunnelStats::from_investors(&[a, b, c]);
        assert_eq!(funnel.stages.len(), 8);
        assert_eq!(funnel.stages[0].stage, InvestorStage::Lead);
        assert_eq!(funnel.count(InvestorStage::Lead), 1);
        assert_eq!(funnel.count(InvestorStage::Negotiation), 2);
        assert_eq!(funnel.count(InvestorStage::Active), 0);
        assert_eq!(funnel.total, 3);
    }
}
