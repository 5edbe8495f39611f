//! 통합 테스트 공용 픽스처

#![allow(dead_code)]

use chrono::Utc;
use estate_core::{
    InvestmentStrategy, InvestmentTerms, InvestorProfile, Location, Position, Pricing, Property,
    PropertyStatus, PropertyType, RentalInfo, RiskLevel,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// 모든 필드를 고정한 테스트용 물건.
pub fn property(id: &str, property_type: PropertyType) -> Property {
    Property {
        id: id.to_string(),
        broker_id: "broker-1".to_string(),
        broker_name: "Иван Петров".to_string(),
        title: format!("Объект {}", id),
        property_type,
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
            current_investment: dec!(0),
            investor_count: 0,
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

/// 예산 2,000,000 / 중간 위험 / 아파트 / 모스크바 / 임대 전략 선호 투자자.
pub fn moscow_investor() -> InvestorProfile {
    InvestorProfile::new(dec!(2000000), RiskLevel::Medium)
        .with_strategies([InvestmentStrategy::Rental])
        .with_types([PropertyType::Apartment])
        .with_locations(["Москва"])
}

pub fn position(id: &str, property_id: &str, amount: Decimal, current_value: Decimal) -> Position {
    Position::from_parts(id, "user-1", property_id, amount, current_value).unwrap()
}

pub fn catalog(properties: Vec<Property>) -> HashMap<String, Property> {
    properties.into_iter().map(|p| (p.id.clone(), p)).collect()
}
