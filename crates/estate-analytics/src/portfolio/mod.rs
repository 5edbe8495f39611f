//! 포트폴리오 분석 모듈
//!
//! 투자자의 포지션을 현재 카탈로그와 대조해 요약합니다.
//!
//! # 모듈 구성
//!
//! - [`aggregator`]: 총액/손익/수익률 요약 및 유형별 분산
//! - [`history`]: 손익 추이 근사 곡선
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use estate_analytics::portfolio::PortfolioAggregator;
//!
//! let aggregator = PortfolioAggregator::new();
//! let summary = aggregator.summarize(&positions, &properties);
//! let buckets = aggregator.diversification(&positions, &properties);
//! let history = aggregator.profit_history(&positions, 6);
//! ```

pub mod aggregator;
pub mod history;

pub use aggregator::*;
pub use history::*;
