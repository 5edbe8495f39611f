//! 명령 테스트용 픽스처.

use chrono::Utc;
use estate_core::{
    InvestmentStrategy, InvestmentTerms, Investor, InvestorProfile, Location, Position, Pricing,
    Property, PropertyStatus, PropertyType, RentalInfo, RiskLevel,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// 모집 중인 모스크바 아파트 (총액 10,000,000 / 최소 1,500,000 / 임대).
pub fn apartment(id: &str) -> Property {
    Property {
        id: id.to_string(),
        broker_id: "broker-1".to_string(),
        broker_name: "Иван Петров".to_string(),
        title: format!("Квартира {}", id),
        property_type: PropertyType::Apartment,
        status: PropertyStatus::Active,
        location: Location::new("Москва", "ЦАО"),
        pricing: Pricing {
            total_price: dec!(10000000),
            min_investment: dec!(1500000),
            currency: "RUB".to_string(),
        },
        investment: InvestmentTerms {
            strategies: vec![InvestmentStrategy::Rental],
            expected_return: dec!(15),
            term_months: 24,
            risk_level: RiskLevel::Medium,
            target_investment: dec!(10000000),
            current_investment: Decimal::ZERO,
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

/// 예산 2,000,000 / 중간 위험 / 임대 / 아파트 / 모스크바 선호 투자자.
pub fn investor(id: &str, broker_id: &str) -> Investor {
    let profile = InvestorProfile::new(dec!(2000000), RiskLevel::Medium)
        .with_strategies([InvestmentStrategy::Rental])
        .with_types([PropertyType::Apartment])
        .with_locations(["Москва"]);
    Investor::lead(id, broker_id, format!("Инвестор {}", id), profile)
}

pub fn position(
    id: &str,
    investor_id: &str,
    property_id: &str,
    amount: Decimal,
    current_value: Decimal,
) -> Position {
    Position::from_parts(id, investor_id, property_id, amount, current_value).unwrap()
}
