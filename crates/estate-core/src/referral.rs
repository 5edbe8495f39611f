//! 브로커 추천 링크.
//!
//! 추천 코드 생성과 UTM 파라미터가 포함된 URL 구성을 제공합니다.

use chrono::Utc;
use rand::Rng;
use url::Url;

use crate::error::{EstateError, EstateResult};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// UTM 파라미터.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
}

impl UtmParams {
    pub fn new(
        source: impl Into<String>,
        medium: impl Into<String>,
        campaign: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            medium: medium.into(),
            campaign: campaign.into(),
        }
    }
}

/// 브로커 추천 코드를 생성합니다.
///
/// 형식: `<브로커 ID 앞 4자>-<밀리초 타임스탬프 base36>-<무작위 5자>`, 대문자.
pub fn generate_referral_code(broker_id: &str) -> String {
    let prefix: String = broker_id.chars().take(4).collect();
    let timestamp = millis_base36(Utc::now().timestamp_millis());

    let mut rng = rand::thread_rng();
    let random: String = (0..5)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{}-{}-{}", prefix, timestamp, random).to_uppercase()
}

/// UTM 파라미터와 선택적 추천 코드(`ref`)를 붙인 URL을 만듭니다.
pub fn build_utm_url(
    base_url: &str,
    utm: &UtmParams,
    referral_code: Option<&str>,
) -> EstateResult<String> {
    let mut url = Url::parse(base_url)
        .map_err(|e| EstateError::InvalidInput(format!("invalid base url {}: {}", base_url, e)))?;

    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("utm_source", &utm.source)
            .append_pair("utm_medium", &utm.medium)
            .append_pair("utm_campaign", &utm.campaign);
        if let Some(code) = referral_code {
            query.append_pair("ref", code);
        }
    }

    Ok(url.to_string())
}

/// 1970년 이전 시각은 0으로 기록합니다.
fn millis_base36(millis: i64) -> String {
    to_base36(u64::try_from(millis).unwrap_or(0))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
