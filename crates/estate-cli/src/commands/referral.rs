//! 브로커 추천 링크 생성.

use anyhow::Result;
use estate_core::{build_utm_url, generate_referral_code, ReferralConfig, UtmParams};
use serde::Serialize;
use tracing::info;

use super::{format_json, OutputFormat};

/// 추천 링크 설정. 비어 있는 값은 설정 파일의 기본값을 사용합니다.
#[derive(Debug, Clone, Default)]
pub struct ReferralLinkConfig {
    pub broker_id: String,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
}

/// 생성된 추천 링크.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralLink {
    pub broker_id: String,
    pub referral_code: String,
    pub url: String,
}

pub fn run_referral(defaults: &ReferralConfig, config: &ReferralLinkConfig) -> Result<ReferralLink> {
    let utm = UtmParams::new(
        config.source.as_deref().unwrap_or(&defaults.default_source),
        config.medium.as_deref().unwrap_or(&defaults.default_medium),
        config.campaign.as_deref().unwrap_or(&defaults.default_campaign),
    );

    let referral_code = generate_referral_code(&config.broker_id);
    let url = build_utm_url(&defaults.base_url, &utm, Some(&referral_code))?;

    info!(broker_id = %config.broker_id, %referral_code, "Referral link generated");
    Ok(ReferralLink {
        broker_id: config.broker_id.clone(),
        referral_code,
        url,
    })
}

pub fn render_referral(link: &ReferralLink, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(link),
        OutputFormat::Table => Ok(format!(
            "{:<10} {}\n{:<10} {}\n",
            "Код", link.referral_code, "Ссылка", link.url
        )),
    }
}
