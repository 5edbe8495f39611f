//! 부동산 투자 마켓플레이스 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 1,000,000 RUB를 연 12%로 12개월 투자했을 때의 수익
//! estate project --amount 1000000 --months 12 --rate 12 --series
//!
//! # 투자자 포트폴리오 보고서 (JSON)
//! estate --format json portfolio --investor inv-1
//!
//! # 투자자에게 맞는 물건 상위 5개
//! estate recommend --investor inv-1 --limit 5
//!
//! # 투자 실행
//! estate --data-dir ./data invest --investor inv-1 --property prop-7 --amount 1500000
//!
//! # 브로커 추천 링크
//! estate referral --broker broker-1 --campaign spring
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use estate_core::{init_logging, AppConfig, JsonFileStore, LogConfig, Money, Percentage};
use rust_decimal::Decimal;
use tracing::{debug, error};

use estate_cli::commands::{invest, portfolio, project, recommend, referral, stats};
use estate_cli::OutputFormat;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "Real-estate investment marketplace CLI - 수익 계산, 포트폴리오, 물건 추천", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (기본: config/default.toml, 없으면 내장 기본값)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 레코드 디렉토리 (설정 파일의 storage.data_dir보다 우선)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 출력 형식 (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 복리 수익 계산
    Project {
        /// 투자 원금
        #[arg(short, long)]
        amount: Money,

        /// 투자 기간 (개월, 기본: projection.default_months)
        #[arg(short, long)]
        months: Option<u32>,

        /// 연 수익률 (%, 기본: projection.default_rate)
        #[arg(short, long)]
        rate: Option<Percentage>,

        /// 월별 성장 곡선 출력
        #[arg(long, default_value = "false")]
        series: bool,
    },

    /// 투자자 포트폴리오 보고서
    Portfolio {
        /// 투자자 ID
        #[arg(short, long)]
        investor: String,

        /// 손익 추이 구간 수 (기본: portfolio.history_buckets)
        #[arg(short, long)]
        buckets: Option<u32>,
    },

    /// 투자자 맞춤 물건 추천
    Recommend {
        /// 투자자 ID
        #[arg(short, long)]
        investor: String,

        /// 최대 결과 수 (0 = 무제한)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// 카탈로그 및 세일즈 퍼널 통계
    Stats {
        /// 브로커 ID 필터
        #[arg(short, long)]
        broker: Option<String>,
    },

    /// 물건에 투자
    Invest {
        /// 투자자 ID
        #[arg(short, long)]
        investor: String,

        /// 물건 ID
        #[arg(short, long)]
        property: String,

        /// 투자 금액
        #[arg(short, long)]
        amount: Money,
    },

    /// 브로커 추천 링크 생성
    Referral {
        /// 브로커 ID
        #[arg(short, long)]
        broker: String,

        /// utm_source (기본: referral.default_source)
        #[arg(long)]
        source: Option<String>,

        /// utm_medium (기본: referral.default_medium)
        #[arg(long)]
        medium: Option<String>,

        /// utm_campaign (기본: referral.default_campaign)
        #[arg(long)]
        campaign: Option<String>,
    },
}

fn main() -> Result<()> {
    // .env가 없어도 무시
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_logging(LogConfig::from(&config.logging))
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.data_dir.clone());
    debug!(data_dir = %data_dir.display(), "Using record store");
    let mut store = JsonFileStore::new(data_dir);

    let result = run(cli.command, cli.format, &config, &mut store);
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            Err(e)
        }
    }
}

/// 설정 파일을 로드합니다.
///
/// 경로를 명시했으면 반드시 읽을 수 있어야 하고, 기본 경로는 파일이 없으면 내장 기본값을 씁니다.
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => AppConfig::load(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("Failed to load config: {}", DEFAULT_CONFIG_PATH)),
        None => Ok(AppConfig::default()),
    }
}

fn run(
    command: Commands,
    format: OutputFormat,
    config: &AppConfig,
    store: &mut JsonFileStore,
) -> Result<String> {
    match command {
        Commands::Project {
            amount,
            months,
            rate,
            series,
        } => {
            let project_config = project::ProjectConfig {
                amount,
                months: months.unwrap_or(config.projection.default_months),
                rate: rate.unwrap_or(config.projection.default_rate),
                series,
            };
            let output = project::run_project(&project_config)?;
            project::render_project(&output, format)
        }

        Commands::Portfolio { investor, buckets } => {
            let portfolio_config = portfolio::PortfolioConfig {
                investor_id: investor,
                buckets: buckets.unwrap_or(config.portfolio.history_buckets),
            };
            let report = portfolio::run_portfolio(store, &portfolio_config)?;
            portfolio::render_portfolio(&report, format)
        }

        Commands::Recommend { investor, limit } => {
            let recommend_config = recommend::RecommendConfig {
                investor_id: investor,
                limit,
            };
            let rows = recommend::run_recommend(store, &config.matching, &recommend_config)?;
            recommend::render_recommendations(&rows, format)
        }

        Commands::Stats { broker } => {
            let output = stats::run_stats(store, broker.as_deref())?;
            stats::render_stats(&output, format)
        }

        Commands::Invest {
            investor,
            property,
            amount,
        } => {
            if amount <= Decimal::ZERO {
                return Err(anyhow!("Invalid amount: {}. Must be positive", amount));
            }
            let invest_config = invest::InvestConfig {
                investor_id: investor,
                property_id: property,
                amount,
            };
            let output = invest::run_invest(store, &invest_config)?;
            invest::render_invest(&output, format)
        }

        Commands::Referral {
            broker,
            source,
            medium,
            campaign,
        } => {
            let link_config = referral::ReferralLinkConfig {
                broker_id: broker,
                source,
                medium,
                campaign,
            };
            let link = referral::run_referral(&config.referral, &link_config)?;
            referral::render_referral(&link, format)
        }
    }
}
