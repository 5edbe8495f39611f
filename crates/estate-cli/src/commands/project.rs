//! 수익 계산기.

use anyhow::Result;
use estate_analytics::{ProjectionPoint, ProjectionResult, ReturnProjector};
use estate_core::{DecimalExt, Money, Percentage};
use serde::Serialize;
use tracing::info;

use super::{format_json, OutputFormat};

/// 수익 계산 설정.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// 투자 원금
    pub amount: Money,
    /// 투자 기간 (개월)
    pub months: u32,
    /// 연 수익률 (%)
    pub rate: Percentage,
    /// 월별 성장 곡선 포함 여부
    pub series: bool,
}

/// 수익 계산 결과.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutput {
    pub principal: Money,
    pub months: u32,
    pub annual_rate: Percentage,
    pub result: ProjectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<ProjectionPoint>>,
}

/// 수익을 계산합니다. 금액은 표시용으로 반올림됩니다.
pub fn run_project(config: &ProjectConfig) -> Result<ProjectOutput> {
    let projector = ReturnProjector::new();
    let result = projector
        .project(config.amount, config.months, config.rate)?
        .rounded();

    let series = if config.series {
        let points = projector
            .project_series(config.amount, config.months, config.rate)?
            .into_iter()
            .map(|p| ProjectionPoint {
                month_index: p.month_index,
                value: p.value.round_money(),
            })
            .collect();
        Some(points)
    } else {
        None
    };

    info!(
        amount = %config.amount,
        months = config.months,
        rate = %config.rate,
        profit = %result.profit,
        "Projection calculated"
    );

    Ok(ProjectOutput {
        principal: config.amount,
        months: config.months,
        annual_rate: config.rate,
        result,
        series,
    })
}

pub fn render_project(output: &ProjectOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(output),
        OutputFormat::Table => Ok(format_table(output)),
    }
}

fn format_table(output: &ProjectOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<16} {:>16}\n", "Сумма", output.principal));
    out.push_str(&format!("{:<16} {:>16}\n", "Срок (мес.)", output.months));
    out.push_str(&format!("{:<16} {:>15}%\n", "Ставка", output.annual_rate));
    out.push_str(&"-".repeat(33));
    out.push('\n');
    out.push_str(&format!("{:<16} {:>16}\n", "Итоговая сумма", output.result.final_amount));
    out.push_str(&format!("{:<16} {:>16}\n", "Прибыль", output.result.profit));
    out.push_str(&format!(
        "{:<16} {:>16}\n",
        "ROI",
        output.result.roi_percent.to_percentage_string()
    ));

    if let Some(series) = &output.series {
        out.push_str("\nMONTH  VALUE\n");
        for point in series {
            out.push_str(&format!("{:>5}  {}\n", point.month_index, point.value));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config(series: bool) -> ProjectConfig {
        ProjectConfig {
            amount: dec!(1000000),
            months: 12,
            rate: dec!(12),
            series,
        }
    }

    #[test]
    fn test_run_project_rounds_for_display() {
        let output = run_project(&config(false)).unwrap();
        assert_eq!(output.result.final_amount, dec!(1126825));
        assert_eq!(output.result.profit, dec!(126825));
        assert_eq!(output.result.roi_percent, dec!(12.68));
        assert!(output.series.is_none());
    }

    #[test]
    fn test_series_ends_at_final_amount() {
        let output = run_project(&config(true)).unwrap();
        let series = output.series.as_ref().unwrap();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].value, dec!(1010000));
        assert_eq!(series[11].value, output.result.final_amount);

        let table = render_project(&output, OutputFormat::Table).unwrap();
        assert!(table.contains("MONTH"));
    }

    #[test]
    fn test_invalid_input_is_error() {
        let mut bad = config(false);
        bad.months = 0;
        assert!(run_project(&bad).is_err());
    }
}
