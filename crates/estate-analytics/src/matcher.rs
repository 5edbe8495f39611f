//! 투자자-물건 매칭.
//!
//! 투자자 프로필에 대해 물건별 적합도 점수(0~100)를 계산하고 순위를 매깁니다.
//!
//! # 판정 순서
//!
//! 1. 최소 투자금이 예산을 넘으면 제외 (부분 점수 없음)
//! 2. 가점 합산 (기본값)
//!    - 선호 전략 일치: +30
//!    - 선호 유형 일치: +25
//!    - 선호 지역 포함 (도시 또는 구역, 대소문자 구분): +20
//!    - 위험 수준 일치: +15, 한 단계 더 보수적이면 +10, 더 위험하면 0
//!    - 예산 / 최소 투자금 이 1~2배: +10
//! 3. 합계가 최소 점수(40) 미만이면 제외
//! 4. 예상 수익률 계산

use estate_core::{InvestorProfile, MatchingConfig, Property, Recommendation};
use rust_decimal::Decimal;
use tracing::debug;

const REASON_STRATEGY: &str = "Подходящая стратегия инвестирования";
const REASON_TYPE: &str = "Предпочитаемый тип недвижимости";
const REASON_LOCATION: &str = "Желаемая локация";
const REASON_RISK_EXACT: &str = "Соответствует уровню риска";
const REASON_RISK_SAFER: &str = "Риск ниже допустимого уровня";
const REASON_BUDGET: &str = "Оптимальное использование бюджета";

/// 물건 추천 계산기.
#[derive(Debug, Clone, Default)]
pub struct RecommendationMatcher {
    config: MatchingConfig,
}

impl RecommendationMatcher {
    /// 기본 가중치로 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정된 가중치로 생성합니다.
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// 물건 하나의 적합도를 평가합니다.
    ///
    /// 예산 초과이거나 점수가 최소 점수 미만이면 `None`.
    pub fn match_property(
        &self,
        investor_id: &str,
        profile: &InvestorProfile,
        property: &Property,
    ) -> Option<Recommendation> {
        if property.pricing.min_investment > profile.budget {
            debug!(
                property_id = %property.id,
                min_investment = %property.pricing.min_investment,
                budget = %profile.budget,
                "Disqualified: minimum investment exceeds budget"
            );
            return None;
        }

        let (score, reasons) = self.score(profile, property);
        if score < u32::from(self.config.min_score) {
            debug!(property_id = %property.id, score, "Disqualified: score below threshold");
            return None;
        }

        let strategy = property.primary_strategy()?;

        Some(Recommendation {
            investor_id: investor_id.to_string(),
            property_id: property.id.clone(),
            match_score: score.min(100) as u8,
            reasons,
            strategy,
            projected_return: property.projected_return_pct(),
        })
    }

    /// 카탈로그 전체를 평가해 점수 내림차순으로 정렬합니다.
    ///
    /// 점수가 같으면 카탈로그 순서를 유지합니다.
    pub fn rank(
        &self,
        investor_id: &str,
        profile: &InvestorProfile,
        properties: &[Property],
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = properties
            .iter()
            .filter_map(|property| self.match_property(investor_id, profile, property))
            .collect();

        // sort_by는 안정 정렬
        recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(
            investor_id,
            candidates = properties.len(),
            matched = recommendations.len(),
            "Ranked recommendations"
        );
        recommendations
    }

    /// 가점과 적용된 규칙 설명을 평가 순서대로 계산합니다.
    fn score(&self, profile: &InvestorProfile, property: &Property) -> (u32, Vec<String>) {
        let mut score = 0u32;
        let mut reasons = Vec::new();
        let mut award = |points: u8, reason: &str| {
            score += u32::from(points);
            reasons.push(reason.to_string());
        };

        let strategy_match = property
            .investment
            .strategies
            .iter()
            .any(|s| profile.strategies.contains(s));
        if strategy_match {
            award(self.config.strategy, REASON_STRATEGY);
        }

        if profile.preferred_property_types.contains(&property.property_type) {
            award(self.config.property_type, REASON_TYPE);
        }

        if profile
            .preferred_locations
            .iter()
            .any(|loc| property.location.mentions(loc))
        {
            award(self.config.location, REASON_LOCATION);
        }

        let risk = property.investment.risk_level;
        if risk == profile.risk_tolerance {
            award(self.config.risk_exact, REASON_RISK_EXACT);
        } else if profile.risk_tolerance.one_step_safer() == Some(risk) {
            award(self.config.risk_conservative, REASON_RISK_SAFER);
        }

        if is_efficient_budget(profile.budget, property.pricing.min_investment) {
            award(self.config.budget_efficiency, REASON_BUDGET);
        }

        (score, reasons)
    }
}

/// 예산이 최소 투자금의 1배 이상 2배 이하인지 확인합니다.
fn is_efficient_budget(budget: Decimal, min_investment: Decimal) -> bool {
    if min_investment <= Decimal::ZERO {
        return false;
    }
    let ratio = budget / min_investment;
    ratio >= Decimal::ONE && ratio <= Decimal::TWO
}
