//! 투자자별 물건 추천.

use anyhow::{anyhow, Result};
use estate_analytics::RecommendationMatcher;
use estate_core::{
    InvestorRepository, MatchingConfig, PropertyRepository, PropertyStatus, Recommendation,
};
use serde::Serialize;
use tracing::info;

use super::{format_json, truncate, OutputFormat};

/// 추천 조회 설정.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    pub investor_id: String,
    /// 최대 결과 수 (0 = 무제한)
    pub limit: usize,
}

/// 추천 결과 한 줄 (표시용 물건 제목 포함).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRow {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub property_title: String,
}

/// 투자자 프로필로 공개 중인 물건을 평가해 순위를 매깁니다.
///
/// 투자 모집 중(`Active`)인 물건만 후보가 됩니다.
pub fn run_recommend<S>(
    store: &S,
    matching: &MatchingConfig,
    config: &RecommendConfig,
) -> Result<Vec<RecommendationRow>>
where
    S: PropertyRepository + InvestorRepository,
{
    let investor = store
        .get_investor(&config.investor_id)?
        .ok_or_else(|| anyhow!("Investor not found: {}", config.investor_id))?;

    let candidates: Vec<_> = store
        .load_properties()?
        .into_iter()
        .filter(|p| p.status == PropertyStatus::Active)
        .collect();

    let matcher = RecommendationMatcher::with_config(matching.clone());
    let mut ranked = matcher.rank(&investor.id, &investor.profile, &candidates);
    if config.limit > 0 {
        ranked.truncate(config.limit);
    }

    info!(
        investor_id = %investor.id,
        candidates = candidates.len(),
        recommended = ranked.len(),
        "Recommendations computed"
    );

    Ok(ranked
        .into_iter()
        .map(|recommendation| {
            let property_title = candidates
                .iter()
                .find(|p| p.id == recommendation.property_id)
                .map(|p| p.title.clone())
                .unwrap_or_default();
            RecommendationRow {
                recommendation,
                property_title,
            }
        })
        .collect())
}

pub fn render_recommendations(rows: &[RecommendationRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(rows),
        OutputFormat::Table => Ok(format_table(rows)),
    }
}

fn format_table(rows: &[RecommendationRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<14} {:<32} {:>5} {:<12} {:>8}\n",
        "PROPERTY", "TITLE", "SCORE", "STRATEGY", "RETURN"
    ));
    out.push_str(&"-".repeat(75));
    out.push('\n');

    for row in rows {
        let rec = &row.recommendation;
        out.push_str(&format!(
            "{:<14} {:<32} {:>5} {:<12} {:>7}%\n",
            truncate(&rec.property_id, 14),
            truncate(&row.property_title, 32),
            rec.match_score,
            rec.strategy.label(),
            rec.projected_return.round_dp(2)
        ));
        for reason in &rec.reasons {
            out.push_str(&format!("{:<14} - {}\n", "", reason));
        }
    }

    out.push('\n');
    out.push_str(&format!("Total: {} recommendations", rows.len()));
    out
}
