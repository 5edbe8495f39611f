//! 포트폴리오 집계 통합 테스트
//!
//! 요약, 분산, 손익 추이가 같은 포지션 집합에 대해 일관된지 검증합니다.

mod common;

use common::{catalog, position, property};
use estate_analytics::{PortfolioAggregator, PortfolioCategory};
use estate_core::PropertyType;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_summary_skips_orphans() {
    let properties = catalog(vec![
        property("flat", PropertyType::Apartment),
        property("mall", PropertyType::Commercial),
    ]);
    let positions = vec![
        position("i1", "flat", dec!(500000), dec!(567000)),
        position("i2", "mall", dec!(1000000), dec!(1180000)),
        position("i3", "deleted", dec!(750000), dec!(825000)),
    ];

    let summary = PortfolioAggregator::new().summarize(&positions, &properties);

    assert_eq!(summary.total_invested, dec!(1500000));
    assert_eq!(summary.total_current_value, dec!(1747000));
    assert_eq!(summary.total_profit, dec!(247000));
    assert_eq!(summary.average_roi_percent.round_dp(4), dec!(16.4667));
    assert_eq!(summary.position_count, 2);
    assert_eq!(summary.orphaned_count, 1);
}

#[test]
fn test_diversification_first_occurrence_order() {
    let properties = catalog(vec![
        property("garage", PropertyType::Garage),
        property("flat", PropertyType::Apartment),
        property("house", PropertyType::House),
        property("spot", PropertyType::Parking),
        property("hotel", PropertyType::Hotel),
    ]);
    let positions = vec![
        position("i1", "garage", dec!(300000), dec!(300000)),
        position("i2", "flat", dec!(1000000), dec!(1100000)),
        position("i3", "spot", dec!(200000), dec!(210000)),
        position("i4", "house", dec!(500000), dec!(520000)),
        position("i5", "hotel", dec!(1000000), dec!(1000000)),
        position("i6", "unknown", dec!(999999), dec!(999999)),
    ];

    let buckets = PortfolioAggregator::new().diversification(&positions, &properties);
    let categories: Vec<PortfolioCategory> = buckets.iter().map(|b| b.category).collect();

    assert_eq!(
        categories,
        vec![
            PortfolioCategory::Other,
            PortfolioCategory::Residential,
            PortfolioCategory::Parking,
        ]
    );
    assert_eq!(buckets[0].amount, dec!(1300000));
    assert_eq!(buckets[1].amount, dec!(1500000));
    assert_eq!(buckets[2].amount, dec!(200000));
    assert_eq!(buckets[1].share_percent, dec!(50));
}

#[test]
fn test_report_uses_resolved_positions() {
    let properties = catalog(vec![property("flat", PropertyType::Apartment)]);
    let positions = vec![
        position("i1", "flat", dec!(600000), dec!(660000)),
        position("i2", "gone", dec!(400000), dec!(800000)),
    ];

    let report = PortfolioAggregator::new().report(&positions, &properties, 3);

    assert_eq!(report.summary.total_profit, dec!(60000));
    assert_eq!(report.summary.orphaned_count, 1);
    assert_eq!(report.diversification.len(), 1);
    assert_eq!(report.profit_history.len(), 3);
    assert_eq!(report.profit_history[2].profit_so_far, dec!(60000));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["diversification"][0]["category"], "residential");
    assert!(json["summary"]["totalInvested"].is_string());
}

#[test]
fn test_zero_amount_position_does_not_break_roi() {
    let properties = catalog(vec![property("flat", PropertyType::Apartment)]);
    let positions = vec![position("i1", "flat", Decimal::ZERO, Decimal::ZERO)];

    let summary = PortfolioAggregator::new().summarize(&positions, &properties);
    assert_eq!(summary.average_roi_percent, Decimal::ZERO);
    assert_eq!(positions[0].roi(), Decimal::ZERO);
}

fn property_type_strategy() -> impl Strategy<Value = PropertyType> {
    prop_oneof![
        Just(PropertyType::Apartment),
        Just(PropertyType::House),
        Just(PropertyType::Commercial),
        Just(PropertyType::Parking),
        Just(PropertyType::Land),
    ]
}

proptest! {
    #[test]
    fn prop_totals_and_buckets_agree(
        entries in prop::collection::vec(
            (0usize..6, 0u32..5_000_000, 0u32..6_000_000),
            0..20,
        ),
        types in prop::collection::vec(property_type_strategy(), 5),
    ) {
        // 물건 ID 0..5만 카탈로그에 존재하고 5는 고아 포지션
        let properties = catalog(
            types
                .iter()
                .enumerate()
                .map(|(i, t)| property(&format!("p{}", i), *t))
                .collect(),
        );
        let positions: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(n, (pid, amount, value))| {
                position(
                    &format!("i{}", n),
                    &format!("p{}", pid),
                    Decimal::from(*amount),
                    Decimal::from(*value),
                )
            })
            .collect();

        let aggregator = PortfolioAggregator::new();
        let summary = aggregator.summarize(&positions, &properties);
        let buckets = aggregator.diversification(&positions, &properties);

        prop_assert_eq!(
            summary.total_profit,
            summary.total_current_value - summary.total_invested
        );
        let bucket_total: Decimal = buckets.iter().map(|b| b.amount).sum();
        prop_assert_eq!(bucket_total, summary.total_invested);
        prop_assert_eq!(summary.position_count + summary.orphaned_count, positions.len());
    }
}
