//! 투자 실행.

use anyhow::{anyhow, Result};
use estate_core::{
    DecimalExt, InvestmentLedger, Money, Percentage, Position, PositionRepository,
    PropertyRepository,
};
use serde::Serialize;
use tracing::info;

use super::{format_json, OutputFormat};

/// 투자 설정.
#[derive(Debug, Clone)]
pub struct InvestConfig {
    pub investor_id: String,
    pub property_id: String,
    pub amount: Money,
}

/// 투자 결과.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestOutput {
    pub position: Position,
    /// 투자 후 물건의 모집 금액
    pub property_current_investment: Money,
    /// 투자 후 모집 진행률 (%)
    pub funding_progress: Percentage,
}

/// 원장에 투자를 기록하고 물건과 포지션을 함께 저장합니다.
///
/// 같은 투자자가 이미 투자한 물건이면 기존 포지션에 합쳐집니다.
/// 물건을 먼저 저장하므로 물건 저장이 실패하면 포지션 파일은 바뀌지 않습니다.
pub fn run_invest<S>(store: &mut S, config: &InvestConfig) -> Result<InvestOutput>
where
    S: PropertyRepository + PositionRepository,
{
    let mut property = store
        .get_property(&config.property_id)?
        .ok_or_else(|| anyhow!("Property not found: {}", config.property_id))?;

    let mut ledger = InvestmentLedger::from_positions(store.load_positions()?);
    let position = ledger
        .commit(&config.investor_id, &mut property, config.amount)?
        .clone();

    let output = InvestOutput {
        position,
        property_current_investment: property.investment.current_investment,
        funding_progress: property.funding_progress_pct(),
    };
    store.save_property(property)?;
    store.save_positions(ledger.positions())?;

    info!(
        investor_id = %config.investor_id,
        property_id = %config.property_id,
        amount = %config.amount,
        position_id = %output.position.id,
        "Investment committed"
    );
    Ok(output)
}

pub fn render_invest(output: &InvestOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(output),
        OutputFormat::Table => Ok(format_table(output)),
    }
}

fn format_table(output: &InvestOutput) -> String {
    let position = &output.position;
    let mut out = String::new();

    out.push_str(&format!("{:<20} {}\n", "Позиция", position.id));
    out.push_str(&format!("{:<20} {}\n", "Объект", position.property_id));
    out.push_str(&format!("{:<20} {}\n", "Сумма", position.amount()));
    out.push_str(&format!("{:<20} {}\n", "Текущая стоимость", position.current_value()));
    out.push_str(&format!(
        "{:<20} {}\n",
        "Собрано по объекту",
        output.property_current_investment
    ));
    out.push_str(&format!(
        "{:<20} {}\n",
        "Прогресс сбора",
        output.funding_progress.to_percentage_string()
    ));
    out
}
