//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! TOML 파일을 읽은 뒤 `ESTATE__` 접두사의 환경 변수로 덮어씁니다
//! (예: `ESTATE__MATCHING__MIN_SCORE=50`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 레코드 저장소 설정
    pub storage: StorageConfig,
    /// 추천 점수 설정
    pub matching: MatchingConfig,
    /// 포트폴리오 분석 설정
    pub portfolio: PortfolioConfig,
    /// 수익 계산기 기본값
    pub projection: ProjectionConfig,
    /// 추천 링크 설정
    pub referral: ReferralConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 레코드 저장소 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON 레코드 파일 디렉토리
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// 추천 점수 가중치.
///
/// 각 규칙의 가점은 독립적으로 더해지며, 합계가 `min_score` 미만이면 추천하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// 최소 적합도 점수
    pub min_score: u8,
    /// 선호 전략 일치
    pub strategy: u8,
    /// 선호 물건 유형 일치
    pub property_type: u8,
    /// 선호 지역 일치
    pub location: u8,
    /// 위험 수준 정확히 일치
    pub risk_exact: u8,
    /// 위험 수준이 한 단계 더 보수적
    pub risk_conservative: u8,
    /// 예산이 최소 투자금의 1~2배
    pub budget_efficiency: u8,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: 40,
            strategy: 30,
            property_type: 25,
            location: 20,
            risk_exact: 15,
            risk_conservative: 10,
            budget_efficiency: 10,
        }
    }
}

/// 포트폴리오 분석 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// 손익 추이 곡선의 구간 수 (월)
    pub history_buckets: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self { history_buckets: 6 }
    }
}

/// 수익 계산기 기본값.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// 기본 투자 기간 (개월)
    pub default_months: u32,
    /// 기본 연 수익률 (%)
    pub default_rate: Decimal,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_months: 12,
            default_rate: Decimal::new(12, 0),
        }
    }
}

/// 추천 링크 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferralConfig {
    /// 추천 링크 기본 URL
    pub base_url: String,
    /// 기본 utm_source
    pub default_source: String,
    /// 기본 utm_medium
    pub default_medium: String,
    /// 기본 utm_campaign
    pub default_campaign: String,
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com/invest".to_string(),
            default_source: "telegram".to_string(),
            default_medium: "social".to_string(),
            default_campaign: "broker_referral".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("ESTATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
