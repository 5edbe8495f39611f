//! JSON 파일 저장소 위에서 명령을 순서대로 실행하는 통합 테스트.

use std::fs;
use std::path::Path;

use estate_cli::commands::{invest, portfolio, recommend, stats};
use estate_cli::OutputFormat;
use estate_core::{
    InvestorStage, JsonFileStore, MatchingConfig, PositionRepository, PropertyRepository,
};
use rust_decimal_macros::dec;

const PROPERTIES: &str = r#"[
  {
    "id": "prop-1",
    "brokerId": "broker-1",
    "brokerName": "Иван Петров",
    "title": "Квартира на Тверской",
    "propertyType": "apartment",
    "status": "active",
    "location": { "city": "Москва", "district": "ЦАО", "address": "Тверская, 1" },
    "pricing": { "totalPrice": "10000000", "minInvestment": "1500000" },
    "investment": {
      "strategy": ["rental"],
      "expectedReturn": "18",
      "term": 24,
      "riskLevel": "medium",
      "targetInvestment": "10000000",
      "currentInvestment": "0",
      "investors": 0
    },
    "rental": { "monthlyIncome": "60000", "occupancyRate": "95", "rentalYield": "7.2" }
  },
  {
    "id": "prop-2",
    "brokerId": "broker-1",
    "title": "Паркинг в Химках",
    "propertyType": "parking",
    "status": "moderation",
    "location": { "city": "Химки", "district": "Центр" },
    "pricing": { "totalPrice": "800000", "minInvestment": "100000" },
    "investment": {
      "strategy": ["resale"],
      "expectedReturn": "12",
      "term": 12,
      "riskLevel": "low",
      "targetInvestment": "800000",
      "currentInvestment": "0",
      "investors": 0
    }
  }
]"#;

const INVESTORS: &str = r#"[
  {
    "id": "inv-1",
    "brokerId": "broker-1",
    "name": "Анна",
    "stage": "negotiation",
    "investmentProfile": {
      "budget": "2000000",
      "strategies": ["rental"],
      "riskTolerance": "medium",
      "preferredPropertyTypes": ["apartment"],
      "preferredLocations": ["Москва"]
    },
    "source": "telegram"
  }
]"#;

fn seed(dir: &Path) {
    fs::write(dir.join("properties.json"), PROPERTIES).unwrap();
    fs::write(dir.join("investors.json"), INVESTORS).unwrap();
}

#[test]
fn test_invest_then_report() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let mut store = JsonFileStore::new(dir.path());

    let rows = recommend::run_recommend(
        &store,
        &MatchingConfig::default(),
        &recommend::RecommendConfig {
            investor_id: "inv-1".to_string(),
            limit: 0,
        },
    )
    .unwrap();
    // prop-2는 심사 중이라 후보가 아님
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recommendation.property_id, "prop-1");
    assert_eq!(rows[0].recommendation.projected_return, dec!(14.4));

    let invested = invest::run_invest(
        &mut store,
        &invest::InvestConfig {
            investor_id: "inv-1".to_string(),
            property_id: "prop-1".to_string(),
            amount: dec!(1500000),
        },
    )
    .unwrap();
    assert_eq!(invested.funding_progress, dec!(15));

    // 새 저장소 인스턴스로 다시 읽어도 같은 상태
    let reopened = JsonFileStore::new(dir.path());
    let positions = reopened.load_positions_for("inv-1").unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].property_title, "Квартира на Тверской");
    let property = reopened.get_property("prop-1").unwrap().unwrap();
    assert_eq!(property.investment.current_investment, dec!(1500000));
    assert_eq!(property.investment.investor_count, 1);

    let report = portfolio::run_portfolio(
        &reopened,
        &portfolio::PortfolioConfig {
            investor_id: "inv-1".to_string(),
            buckets: 6,
        },
    )
    .unwrap();
    assert_eq!(report.summary.total_invested, dec!(1500000));
    assert_eq!(report.summary.total_profit, dec!(0));
    assert_eq!(report.diversification.len(), 1);

    let json = portfolio::render_portfolio(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["diversification"][0]["category"], "residential");
}

#[test]
fn test_stats_reads_seeded_records() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let store = JsonFileStore::new(dir.path());

    let output = stats::run_stats(&store, Some("broker-1")).unwrap();
    assert_eq!(output.catalog.total_properties, 2);
    assert_eq!(output.catalog.active_properties, 1);
    assert_eq!(output.catalog.average_expected_return, dec!(15));
    assert_eq!(output.funnel.count(InvestorStage::Negotiation), 1);

    let empty_dir = tempfile::tempdir().unwrap();
    let empty = stats::run_stats(&JsonFileStore::new(empty_dir.path()), None).unwrap();
    assert_eq!(empty.catalog.total_properties, 0);
    assert_eq!(empty.funnel.total, 0);
}

#[test]
fn test_invest_into_property_under_moderation_fails() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let mut store = JsonFileStore::new(dir.path());

    let result = invest::run_invest(
        &mut store,
        &invest::InvestConfig {
            investor_id: "inv-1".to_string(),
            property_id: "prop-2".to_string(),
            amount: dec!(200000),
        },
    );
    assert!(result.is_err());
    assert!(store.load_positions().unwrap().is_empty());
}
