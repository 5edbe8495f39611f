//! 투자자 및 세일즈 퍼널.
//!
//! 브로커가 관리하는 투자자 레코드와 투자 성향 프로필을 정의합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::{InvestmentStrategy, PropertyType, RiskLevel};
use crate::types::Money;

/// 투자 성향 프로필.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfile {
    /// 투자 가능 예산 상한
    pub budget: Money,
    /// 선호 전략
    #[serde(default)]
    pub strategies: Vec<InvestmentStrategy>,
    /// 감내 가능한 위험 수준
    pub risk_tolerance: RiskLevel,
    /// 선호 물건 유형
    #[serde(default)]
    pub preferred_property_types: Vec<PropertyType>,
    /// 선호 지역 (도시/구역 이름의 부분 문자열)
    #[serde(default)]
    pub preferred_locations: Vec<String>,
}

impl InvestorProfile {
    pub fn new(budget: Money, risk_tolerance: RiskLevel) -> Self {
        Self {
            budget,
            strategies: Vec::new(),
            risk_tolerance,
            preferred_property_types: Vec::new(),
            preferred_locations: Vec::new(),
        }
    }

    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = InvestmentStrategy>) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = PropertyType>) -> Self {
        self.preferred_property_types = types.into_iter().collect();
        self
    }

    pub fn with_locations<S: Into<String>>(mut self, locations: impl IntoIterator<Item = S>) -> Self {
        self.preferred_locations = locations.into_iter().map(Into::into).collect();
        self
    }
}

/// 세일즈 퍼널 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorStage {
    Lead,
    Consultation,
    Analysis,
    OfferSent,
    Negotiation,
    DealPreparation,
    Active,
    Inactive,
}

impl InvestorStage {
    /// 퍼널 표시 순서.
    pub const ALL: [InvestorStage; 8] = [
        InvestorStage::Lead,
        InvestorStage::Consultation,
        InvestorStage::Analysis,
        InvestorStage::OfferSent,
        InvestorStage::Negotiation,
        InvestorStage::DealPreparation,
        InvestorStage::Active,
        InvestorStage::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InvestorStage::Lead => "Лид",
            InvestorStage::Consultation => "Консультация",
            InvestorStage::Analysis => "Анализ",
            InvestorStage::OfferSent => "Предложение отправлено",
            InvestorStage::Negotiation => "Переговоры",
            InvestorStage::DealPreparation => "Подготовка сделки",
            InvestorStage::Active => "Активный",
            InvestorStage::Inactive => "Неактивный",
        }
    }
}

/// 투자자 활동 기록 항목.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: DateTime<Utc>,
    pub action: String,
    pub details: String,
}

/// 브로커가 관리하는 투자자.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub broker_id: String,
    #[serde(default)]
    pub name: String,
    pub stage: InvestorStage,
    #[serde(rename = "investmentProfile")]
    pub profile: InvestorProfile,
    /// 유입 경로 (utm_source 또는 추천 코드)
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Investor {
    /// 새 리드를 생성합니다.
    pub fn lead(
        id: impl Into<String>,
        broker_id: impl Into<String>,
        name: impl Into<String>,
        profile: InvestorProfile,
    ) -> Self {
        Self {
            id: id.into(),
            broker_id: broker_id.into(),
            name: name.into(),
            stage: InvestorStage::Lead,
            profile,
            source: String::new(),
            referral_code: None,
            timeline: vec![TimelineEntry {
                date: Utc::now(),
                action: "created".to_string(),
                details: "Новый лид".to_string(),
            }],
        }
    }

    /// 퍼널 단계를 변경하고 활동 기록에 남깁니다.
    ///
    /// 같은 단계로의 이동은 기록하지 않으며 `false`를 반환합니다.
    pub fn move_to_stage(&mut self, stage: InvestorStage) -> bool {
        if self.stage == stage {
            return false;
        }

        tracing::debug!(investor_id = %self.id, from = ?self.stage, to = ?stage, "Investor stage changed");
        self.stage = stage;
        self.timeline.push(TimelineEntry {
            date: Utc::now(),
            action: "stage_changed".to_string(),
            details: format!("Переведён на этап: {}", stage.label()),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_move_to_stage() {
        let profile = InvestorProfile::new(dec!(2000000), RiskLevel::Medium);
        let mut investor = Investor::lead("inv-1", "b-1", "Анна", profile);

        assert!(investor.move_to_stage(InvestorStage::Consultation));
        assert!(!investor.move_to_stage(InvestorStage::Consultation));

        assert_eq!(investor.stage, InvestorStage::Consultation);
        assert_eq!(investor.timeline.len(), 2);
        assert_eq!(
            investor.timeline[1].details,
            "Переведён на этап: Консультация"
        );
    }

    #[test]
    fn test_profile_deserialize() {
        let json = r#"{
            "budget": 2000000,
            "strategies": ["rental"],
            "riskTolerance": "medium",
            "preferredPropertyTypes": ["apartment"],
            "preferredLocations": ["Москва"]
        }"#;
        let profile: InvestorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.budget, dec!(2000000));
        assert_eq!(profile.preferred_property_types, vec![PropertyType::Apartment]);
    }
}
