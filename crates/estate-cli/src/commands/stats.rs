//! 브로커 대시보드 통계.

use anyhow::Result;
use estate_analytics::{CatalogStats, FunnelStats};
use estate_core::{DecimalExt, InvestorRepository, PropertyRepository};
use serde::Serialize;
use tracing::info;

use super::{format_json, OutputFormat};

/// 카탈로그와 세일즈 퍼널 통계.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_id: Option<String>,
    pub catalog: CatalogStats,
    pub funnel: FunnelStats,
}

/// 통계를 계산합니다. `broker_id`가 있으면 해당 브로커의 물건과 투자자만 집계합니다.
pub fn run_stats<S>(store: &S, broker_id: Option<&str>) -> Result<StatsOutput>
where
    S: PropertyRepository + InvestorRepository,
{
    let properties = store.load_properties()?;
    let investors: Vec<_> = store
        .load_investors()?
        .into_iter()
        .filter(|i| broker_id.map_or(true, |id| i.broker_id == id))
        .collect();

    let catalog = CatalogStats::from_properties(&properties, broker_id);
    let funnel = FunnelStats::from_investors(&investors);

    info!(
        broker_id = broker_id.unwrap_or("*"),
        properties = catalog.total_properties,
        investors = funnel.total,
        "Stats computed"
    );

    Ok(StatsOutput {
        broker_id: broker_id.map(str::to_string),
        catalog,
        funnel,
    })
}

pub fn render_stats(stats: &StatsOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(stats),
        OutputFormat::Table => Ok(format_table(stats)),
    }
}

fn format_table(stats: &StatsOutput) -> String {
    let catalog = &stats.catalog;
    let mut out = String::new();

    out.push_str(&format!("{:<26} {:>14}\n", "Объектов", catalog.total_properties));
    out.push_str(&format!("{:<26} {:>14}\n", "Активных", catalog.active_properties));
    out.push_str(&format!(
        "{:<26} {:>14}\n",
        "Привлечено инвестиций",
        catalog.total_investment_raised.round_money()
    ));
    out.push_str(&format!(
        "{:<26} {:>14}\n",
        "Средняя доходность",
        catalog.average_expected_return.to_percentage_string()
    ));

    out.push_str(&format!("\n{:<26} {:>14}\n", "STAGE", "INVESTORS"));
    out.push_str(&"-".repeat(41));
    out.push('\n');
    for stage in &stats.funnel.stages {
        out.push_str(&format!("{:<26} {:>14}\n", stage.stage.label(), stage.count));
    }
    out.push_str(&format!("{:<26} {:>14}\n", "Всего", stats.funnel.total));

    out
}
