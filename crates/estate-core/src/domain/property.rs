//! 투자 물건(Property) 모델.
//!
//! 이 모듈은 브로커가 등록하는 투자 물건과 관련 분류 타입을 정의합니다:
//! - `Property` - 가격, 위험도, 전략 정보를 가진 투자 물건
//! - `PropertyType`, `PropertyStatus`, `InvestmentStrategy`, `RiskLevel` - 분류 열거형

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EstateError, EstateResult};
use crate::types::{DecimalExt, Money, Percentage};

/// 물건 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    Land,
    Hotel,
    Garage,
    Parking,
    Storage,
}

impl PropertyType {
    /// 사용자에게 표시되는 이름.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Квартира",
            PropertyType::House => "Дом",
            PropertyType::Commercial => "Коммерческая",
            PropertyType::Land => "Земля",
            PropertyType::Hotel => "Отель",
            PropertyType::Garage => "Гараж",
            PropertyType::Parking => "Паркинг",
            PropertyType::Storage => "Кладовая",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Commercial => "commercial",
            PropertyType::Land => "land",
            PropertyType::Hotel => "hotel",
            PropertyType::Garage => "garage",
            PropertyType::Parking => "parking",
            PropertyType::Storage => "storage",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 물건 상태.
///
/// 물건은 물리적으로 삭제되지 않으며, 더 이상 노출하지 않을 때는 `Archived`로 전이합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Draft,
    Moderation,
    Active,
    Reserved,
    Sold,
    Archived,
}

impl PropertyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Draft => "Черновик",
            PropertyStatus::Moderation => "На модерации",
            PropertyStatus::Active => "Активен",
            PropertyStatus::Reserved => "Забронирован",
            PropertyStatus::Sold => "Продан",
            PropertyStatus::Archived => "В архиве",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Draft => "draft",
            PropertyStatus::Moderation => "moderation",
            PropertyStatus::Active => "active",
            PropertyStatus::Reserved => "reserved",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Archived => "archived",
        }
    }

    /// `self`에서 `next`로의 전이가 허용되는지 확인합니다.
    pub fn can_transition_to(&self, next: PropertyStatus) -> bool {
        use PropertyStatus::*;
        match (self, next) {
            (Archived, _) => false,
            (_, Archived) => true,
            (Draft, Moderation) => true,
            (Moderation, Draft) | (Moderation, Active) => true,
            (Active, Reserved) | (Active, Sold) => true,
            (Reserved, Active) | (Reserved, Sold) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 투자 전략.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStrategy {
    Resale,
    Rental,
    RentalAndResale,
    Development,
}

impl InvestmentStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentStrategy::Resale => "Перепродажа",
            InvestmentStrategy::Rental => "Аренда",
            InvestmentStrategy::RentalAndResale => "Аренда + Перепродажа",
            InvestmentStrategy::Development => "Развитие",
        }
    }
}

/// 위험 수준 (Low < Medium < High 순서).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Низкий",
            RiskLevel::Medium => "Средний",
            RiskLevel::High => "Высокий",
        }
    }

    /// 한 단계 더 보수적인 위험 수준. `Low`는 더 낮은 단계가 없습니다.
    pub fn one_step_safer(&self) -> Option<RiskLevel> {
        match self {
            RiskLevel::Low => None,
            RiskLevel::Medium => Some(RiskLevel::Low),
            RiskLevel::High => Some(RiskLevel::Medium),
        }
    }
}

/// 물건 위치.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub district: String,
    #[serde(default)]
    pub address: String,
}

impl Location {
    pub fn new(city: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            district: district.into(),
            address: String::new(),
        }
    }

    /// 도시 또는 구역 이름이 `needle`을 포함하는지 확인합니다 (대소문자 구분).
    pub fn mentions(&self, needle: &str) -> bool {
        self.city.contains(needle) || self.district.contains(needle)
    }
}

/// 가격 정보.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub total_price: Money,
    pub min_investment: Money,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "RUB".to_string()
}

/// 투자 조건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTerms {
    /// 투자 전략 목록 (비어 있으면 안 됨)
    #[serde(rename = "strategy")]
    pub strategies: Vec<InvestmentStrategy>,
    /// 기대 연 수익률 (%)
    pub expected_return: Percentage,
    /// 투자 기간 (개월)
    #[serde(rename = "term")]
    pub term_months: u32,
    pub risk_level: RiskLevel,
    pub target_investment: Money,
    pub current_investment: Money,
    #[serde(rename = "investors")]
    pub investor_count: u32,
}

/// 임대 정보.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalInfo {
    pub monthly_income: Money,
    pub occupancy_rate: Percentage,
    pub rental_yield: Percentage,
}

/// 재매각 정보.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResaleInfo {
    pub expected_price: Money,
    pub expected_profit: Money,
    pub market_growth: Percentage,
}

/// 투자 물건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub broker_id: String,
    #[serde(default)]
    pub broker_name: String,
    #[serde(default)]
    pub title: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub location: Location,
    pub pricing: Pricing,
    pub investment: InvestmentTerms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental: Option<RentalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resale: Option<ResaleInfo>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// 불변 조건을 검사합니다.
    ///
    /// - 전략 목록은 비어 있지 않음
    /// - 기대 수익률 > 0, 기간 > 0
    /// - 금액은 음수가 아님
    /// - `current_investment <= target_investment`
    /// - `min_investment <= total_price`
    pub fn validate(&self) -> EstateResult<()> {
        let invalid = |msg: &str| {
            Err::<(), _>(EstateError::InvalidInput(format!("{}: {}", self.id, msg)))
        };

        if self.id.is_empty() {
            return Err(EstateError::InvalidInput("property id is empty".to_string()));
        }
        if self.investment.strategies.is_empty() {
            return invalid("strategy list is empty");
        }
        if self.investment.expected_return <= Decimal::ZERO {
            return invalid("expected return must be positive");
        }
        if self.investment.term_months == 0 {
            return invalid("term must be positive");
        }
        if self.pricing.total_price < Decimal::ZERO
            || self.pricing.min_investment < Decimal::ZERO
            || self.investment.target_investment < Decimal::ZERO
            || self.investment.current_investment < Decimal::ZERO
        {
            return invalid("money amounts must be non-negative");
        }
        if self.investment.current_investment > self.investment.target_investment {
            return invalid("current investment exceeds target investment");
        }
        if self.pricing.min_investment > self.pricing.total_price {
            return invalid("minimum investment exceeds total price");
        }
        Ok(())
    }

    pub fn has_strategy(&self, strategy: InvestmentStrategy) -> bool {
        self.investment.strategies.contains(&strategy)
    }

    /// 대표 전략 (목록의 첫 번째 전략).
    pub fn primary_strategy(&self) -> Option<InvestmentStrategy> {
        self.investment.strategies.first().copied()
    }

    /// 투자 기간 전체의 예상 수익률(%).
    ///
    /// `Rental` 전략이면 월 임대 수입 × 기간, `Resale` 전략이면 재매각 예상 이익을 더한 뒤
    /// 총 가격으로 나눕니다. `RentalAndResale`은 어느 쪽에도 해당하지 않습니다.
    pub fn projected_return_pct(&self) -> Percentage {
        let mut total_return = Decimal::ZERO;

        if self.has_strategy(InvestmentStrategy::Rental) {
            if let Some(rental) = &self.rental {
                total_return += rental.monthly_income * Decimal::from(self.investment.term_months);
            }
        }

        if self.has_strategy(InvestmentStrategy::Resale) {
            if let Some(resale) = &self.resale {
                total_return += resale.expected_profit;
            }
        }

        total_return.ratio_or_zero(self.pricing.total_price) * Decimal::ONE_HUNDRED
    }

    /// 월 평균 수입.
    ///
    /// 임대 정보가 있으면 월 임대 수입, 없으면 재매각 이익을 기간으로 나눈 값입니다.
    pub fn monthly_income(&self) -> Money {
        if let Some(rental) = &self.rental {
            return rental.monthly_income;
        }
        match &self.resale {
            Some(resale) if self.investment.term_months > 0 => {
                resale.expected_profit / Decimal::from(self.investment.term_months)
            }
            _ => Decimal::ZERO,
        }
    }

    /// 모집 진행률(%).
    pub fn funding_progress_pct(&self) -> Percentage {
        self.investment
            .current_investment
            .ratio_or_zero(self.investment.target_investment)
            * Decimal::ONE_HUNDRED
    }

    /// 남은 모집 가능 금액.
    pub fn remaining_capacity(&self) -> Money {
        (self.investment.target_investment - self.investment.current_investment).max(Decimal::ZERO)
    }

    /// 상태를 전이합니다. 같은 상태로의 전이는 아무 일도 하지 않습니다.
    pub fn transition_to(&mut self, next: PropertyStatus) -> EstateResult<()> {
        if self.status == next {
            return Ok(());
        }
        if !self.status.can_transition_to(next) {
            return Err(EstateError::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }

        tracing::debug!(property_id = %self.id, from = %self.status, to = %next, "Property status changed");
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 투자금 유입을 기록합니다.
    pub fn record_inflow(&mut self, amount: Money, new_investor: bool) -> EstateResult<()> {
        if amount <= Decimal::ZERO {
            return Err(EstateError::InvalidInput(format!(
                "inflow amount must be positive: {}",
                amount
            )));
        }
        if amount > self.remaining_capacity() {
            return Err(EstateError::InvalidInput(format!(
                "inflow {} exceeds remaining capacity {} of {}",
                amount,
                self.remaining_capacity(),
                self.id
            )));
        }

        self.investment.current_investment += amount;
        if new_investor {
            self.investment.investor_count += 1;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 투자금 유출을 기록합니다.
    pub fn record_outflow(&mut self, amount: Money, investor_left: bool) -> EstateResult<()> {
        if amount <= Decimal::ZERO {
            return Err(EstateError::InvalidInput(format!(
                "outflow amount must be positive: {}",
                amount
            )));
        }
        if amount > self.investment.current_investment {
            return Err(EstateError::InsufficientFunds(format!(
                "outflow {} exceeds current investment {} of {}",
                amount, self.investment.current_investment, self.id
            )));
        }

        self.investment.current_investment -= amount;
        if investor_left {
            self.investment.investor_count = self.investment.investor_count.saturating_sub(1);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use rust_decimal_macros::dec;

    /// 테스트용 기본 물건.
    pub fn apartment(id: &str) -> Property {
        Property {
            id: id.to_string(),
            broker_id: "broker-1".to_string(),
            broker_name: "Иван Петров".to_string(),
            title: "ЖК «Северный квартал»".to_string(),
            property_type: PropertyType::Apartment,
            status: PropertyStatus::Active,
            location: Location::new("Москва", "САО"),
            pricing: Pricing {
                total_price: dec!(10000000),
                min_investment: dec!(1500000),
                currency: "RUB".to_string(),
            },
            investment: InvestmentTerms {
                strategies: vec![InvestmentStrategy::Rental],
                expected_return: dec!(18),
                term_months: 24,
                risk_level: RiskLevel::Medium,
                target_investment: dec!(10000000),
                current_investment: dec!(2000000),
                investor_count: 2,
            },
            rental: Some(RentalInfo {
                monthly_income: dec!(60000),
                occupancy_rate: dec!(95),
                rental_yield: dec!(7.2),
            }),
            resale: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::apartment;
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate() {
        let property = apartment("p1");
        assert!(property.validate().is_ok());

        let mut over_funded = apartment("p2");
        over_funded.investment.current_investment = dec!(20000000);
        assert!(over_funded.validate().is_err());

        let mut no_strategy = apartment("p3");
        no_strategy.investment.strategies.clear();
        assert!(no_strategy.validate().is_err());

        let mut expensive_entry = apartment("p4");
        expensive_entry.pricing.min_investment = dec!(20000000);
        assert!(expensive_entry.validate().is_err());
    }

    #[test]
    fn test_projected_return_rental() {
        // 60,000 × 24 / 10,000,000 × 100 = 14.4
        let property = apartment("p1");
        assert_eq!(property.projected_return_pct(), dec!(14.4));
    }

    #[test]
    fn test_projected_return_combined_strategy_counts_nothing() {
        let mut property = apartment("p1");
        property.investment.strategies = vec![InvestmentStrategy::RentalAndResale];
        assert_eq!(property.projected_return_pct(), Decimal::ZERO);
    }

    #[test]
    fn test_projected_return_zero_price() {
        let mut property = apartment("p1");
        property.pricing.total_price = Decimal::ZERO;
        property.pricing.min_investment = Decimal::ZERO;
        assert_eq!(property.projected_return_pct(), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_income_from_resale() {
        let mut property = apartment("p1");
        property.rental = None;
        property.resale = Some(ResaleInfo {
            expected_price: dec!(12400000),
            expected_profit: dec!(2400000),
            market_growth: dec!(8),
        });
        assert_eq!(property.monthly_income(), dec!(100000));
    }

    #[test]
    fn test_status_transitions() {
        let mut property = apartment("p1");
        property.status = PropertyStatus::Draft;

        property.transition_to(PropertyStatus::Moderation).unwrap();
        property.transition_to(PropertyStatus::Active).unwrap();
        property.transition_to(PropertyStatus::Reserved).unwrap();
        property.transition_to(PropertyStatus::Sold).unwrap();
        assert!(property.transition_to(PropertyStatus::Active).is_err());

        property.transition_to(PropertyStatus::Archived).unwrap();
        let err = property.transition_to(PropertyStatus::Draft).unwrap_err();
        assert!(matches!(err, EstateError::InvalidTransition { .. }));
    }

    #[test]
    fn test_inflow_outflow() {
        let mut property = apartment("p1");

        property.record_inflow(dec!(1000000), true).unwrap();
        assert_eq!(property.investment.current_investment, dec!(3000000));
        assert_eq!(property.investment.investor_count, 3);

        // 목표 금액 초과
        assert!(property.record_inflow(dec!(8000000), false).is_err());

        property.record_outflow(dec!(500000), false).unwrap();
        assert_eq!(property.investment.current_investment, dec!(2500000));
        assert!(matches!(
            property.record_outflow(dec!(9000000), true),
            Err(EstateError::InsufficientFunds(_))
        ));
    }

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert_eq!(RiskLevel::High.one_step_safer(), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::Low.one_step_safer(), None);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "obj-1",
            "brokerId": "b-1",
            "propertyType": "parking",
            "status": "active",
            "location": {"city": "Казань", "district": "Вахитовский"},
            "pricing": {"totalPrice": "1200000", "minInvestment": "300000"},
            "investment": {
                "strategy": ["rental_and_resale"],
                "expectedReturn": "14",
                "term": 36,
                "riskLevel": "low",
                "targetInvestment": "1200000",
                "currentInvestment": "0",
                "investors": 0
            }
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type, PropertyType::Parking);
        assert_eq!(property.pricing.currency, "RUB");
        assert_eq!(
            property.primary_strategy(),
            Some(InvestmentStrategy::RentalAndResale)
        );
        assert!(property.validate().is_ok());
    }
}
