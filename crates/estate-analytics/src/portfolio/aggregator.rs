//! 포트폴리오 집계.
//!
//! 카탈로그에서 물건을 찾을 수 없는 포지션(고아 포지션)은 요약과 분산 결과에서
//! 모두 제외됩니다. 에러로 취급하지 않습니다.

use estate_core::{roi_pct, DecimalExt, Money, Percentage, Position, Property, PropertyType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::history::ProfitHistoryPoint;

/// 포트폴리오 분산 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioCategory {
    /// 아파트, 주택
    Residential,
    Commercial,
    Parking,
    /// 그 외 모든 유형
    Other,
}

impl PortfolioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::Residential => "residential",
            PortfolioCategory::Commercial => "commercial",
            PortfolioCategory::Parking => "parking",
            PortfolioCategory::Other => "other",
        }
    }

    /// 차트 범례용 이름.
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::Residential => "Жилая недвижимость",
            PortfolioCategory::Commercial => "Коммерческая недвижимость",
            PortfolioCategory::Parking => "Паркинг",
            PortfolioCategory::Other => "Другое",
        }
    }
}

impl From<PropertyType> for PortfolioCategory {
    fn from(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Apartment | PropertyType::House => PortfolioCategory::Residential,
            PropertyType::Commercial => PortfolioCategory::Commercial,
            PropertyType::Parking => PortfolioCategory::Parking,
            _ => PortfolioCategory::Other,
        }
    }
}

impl fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 포트폴리오 요약.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// 총 투자 금액
    pub total_invested: Money,
    /// 총 현재 가치
    pub total_current_value: Money,
    /// 총 손익 (= total_current_value − total_invested)
    pub total_profit: Money,
    /// 평균 수익률 (%). 투자 금액이 0이면 0
    pub average_roi_percent: Percentage,
    /// 집계에 포함된 포지션 수
    pub position_count: usize,
    /// 물건을 찾을 수 없어 제외된 포지션 수
    pub orphaned_count: usize,
}

/// 분산 구간.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationBucket {
    pub category: PortfolioCategory,
    /// 해당 분류의 투자 금액 합계
    pub amount: Money,
    /// 전체 분산 금액 대비 비중 (%)
    pub share_percent: Percentage,
}

/// 요약, 분산, 손익 추이를 한 번에 담은 보고서.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub summary: PortfolioSummary,
    pub diversification: Vec<DiversificationBucket>,
    pub profit_history: Vec<ProfitHistoryPoint>,
}

/// 포트폴리오 집계기.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioAggregator;

impl PortfolioAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 포지션을 카탈로그와 대조해 요약합니다.
    ///
    /// 빈 목록이면 모든 합계가 0입니다.
    pub fn summarize(
        &self,
        positions: &[Position],
        properties: &HashMap<String, Property>,
    ) -> PortfolioSummary {
        let mut summary = PortfolioSummary::default();

        for (position, _) in resolve(positions, properties) {
            summary.total_invested += position.amount();
            summary.total_current_value += position.current_value();
            summary.position_count += 1;
        }

        summary.orphaned_count = positions.len() - summary.position_count;
        summary.total_profit = summary.total_current_value - summary.total_invested;
        summary.average_roi_percent = roi_pct(summary.total_profit, summary.total_invested);
        summary
    }

    /// 물건 유형 분류별 투자 금액.
    ///
    /// 분류는 처음 등장한 순서대로 나열되며 정렬하지 않습니다.
    pub fn diversification(
        &self,
        positions: &[Position],
        properties: &HashMap<String, Property>,
    ) -> Vec<DiversificationBucket> {
        let mut buckets: Vec<DiversificationBucket> = Vec::new();

        for (position, property) in resolve(positions, properties) {
            let category = PortfolioCategory::from(property.property_type);
            match buckets.iter_mut().find(|b| b.category == category) {
                Some(bucket) => bucket.amount += position.amount(),
                None => buckets.push(DiversificationBucket {
                    category,
                    amount: position.amount(),
                    share_percent: Decimal::ZERO,
                }),
            }
        }

        let total: Money = buckets.iter().map(|b| b.amount).sum();
        for bucket in &mut buckets {
            bucket.share_percent = bucket.amount.ratio_or_zero(total) * Decimal::ONE_HUNDRED;
        }
        buckets
    }

    /// 요약, 분산, 손익 추이를 함께 계산합니다.
    ///
    /// 손익 추이도 카탈로그에서 찾은 포지션만으로 계산해 세 결과가 같은 포지션 집합을 다룹니다.
    pub fn report(
        &self,
        positions: &[Position],
        properties: &HashMap<String, Property>,
        history_buckets: u32,
    ) -> PortfolioReport {
        let resolved: Vec<Position> = resolve(positions, properties)
            .map(|(position, _)| position.clone())
            .collect();

        let mut summary = self.summarize(&resolved, properties);
        summary.orphaned_count = positions.len() - resolved.len();

        PortfolioReport {
            summary,
            diversification: self.diversification(&resolved, properties),
            profit_history: self.profit_history(&resolved, history_buckets),
        }
    }
}

/// 카탈로그에 물건이 있는 포지션과 그 물건을 입력 순서대로 반환합니다.
fn resolve<'a>(
    positions: &'a [Position],
    properties: &'a HashMap<String, Property>,
) -> impl Iterator<Item = (&'a Position, &'a Property)> + 'a {
    positions.iter().filter_map(move |position| {
        let property = properties.get(&position.property_id);
        if property.is_none() {
            debug!(
                position_id = %position.id,
                property_id = %position.property_id,
                "Skipping orphaned position"
            );
        }
        property.map(|property| (position, property))
    })
}
