//! 투자자 포트폴리오 보고서.

use anyhow::Result;
use estate_analytics::{PortfolioAggregator, PortfolioReport};
use estate_core::{DecimalExt, PositionRepository, PropertyRepository};
use tracing::info;

use super::{format_json, OutputFormat};

/// 포트폴리오 조회 설정.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub investor_id: String,
    /// 손익 추이 구간 수
    pub buckets: u32,
}

/// 투자자의 포지션을 카탈로그와 대조해 보고서를 만듭니다.
pub fn run_portfolio<S>(store: &S, config: &PortfolioConfig) -> Result<PortfolioReport>
where
    S: PropertyRepository + PositionRepository,
{
    let positions = store.load_positions_for(&config.investor_id)?;
    let properties = store.property_map()?;

    let report = PortfolioAggregator::new().report(&positions, &properties, config.buckets);

    info!(
        investor_id = %config.investor_id,
        positions = report.summary.position_count,
        orphaned = report.summary.orphaned_count,
        "Portfolio report generated"
    );
    Ok(report)
}

pub fn render_portfolio(report: &PortfolioReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(report),
        OutputFormat::Table => Ok(format_table(report)),
    }
}

fn format_table(report: &PortfolioReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!("{:<22} {:>16}\n", "Инвестировано", summary.total_invested));
    out.push_str(&format!("{:<22} {:>16}\n", "Текущая стоимость", summary.total_current_value));
    out.push_str(&format!("{:<22} {:>16}\n", "Прибыль", summary.total_profit));
    out.push_str(&format!(
        "{:<22} {:>16}\n",
        "Средняя доходность",
        summary.average_roi_percent.to_percentage_string()
    ));
    out.push_str(&format!("{:<22} {:>16}\n", "Позиций", summary.position_count));
    if summary.orphaned_count > 0 {
        out.push_str(&format!("{:<22} {:>16}\n", "Без объекта", summary.orphaned_count));
    }

    if !report.diversification.is_empty() {
        out.push_str(&format!("\n{:<14} {:>16} {:>8}\n", "CATEGORY", "AMOUNT", "SHARE"));
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for bucket in &report.diversification {
            out.push_str(&format!(
                "{:<14} {:>16} {:>8}\n",
                bucket.category.label(),
                bucket.amount.round_money(),
                bucket.share_percent.to_percentage_string()
            ));
        }
    }

    if !report.profit_history.is_empty() {
        out.push_str(&format!("\n{:<8} {:>16}\n", "BUCKET", "PROFIT"));
        for point in &report.profit_history {
            out.push_str(&format!(
                "{:<8} {:>16}\n",
                point.bucket_index,
                point.profit_so_far.round_money()
            ));
        }
    }

    out
}
