//! 투자 분석 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 복리 수익 예측 (수익 계산기)
//! - 포트폴리오 요약, 유형별 분산, 손익 추이
//! - 투자자 프로필 기반 물건 추천
//! - 브로커 카탈로그 및 퍼널 통계
//!
//! 모든 계산은 이미 로드된 레코드를 입력으로 받는 순수 함수이며,
//! 저장소 접근이나 공유 상태가 없습니다.
//!
//! # Re-exports
//!
//! - [`projection`]: 수익 예측 (ReturnProjector)
//! - [`portfolio`]: 포트폴리오 분석 (PortfolioAggregator)
//! - [`matcher`]: 물건 추천 (RecommendationMatcher)
//! - [`stats`]: 카탈로그/퍼널 통계

pub mod matcher;
pub mod portfolio;
pub mod projection;
pub mod stats;

// Projection 모듈 re-exports
pub use projection::{ProjectionError, ProjectionPoint, ProjectionResult, ReturnProjector};

// Portfolio 모듈 re-exports
pub use portfolio::{
    DiversificationBucket, PortfolioAggregator, PortfolioCategory, PortfolioReport,
    PortfolioSummary, ProfitHistoryPoint,
};

// Matcher 모듈 re-exports
pub use matcher::RecommendationMatcher;

// Stats 모듈 re-exports
pub use stats::{CatalogStats, FunnelStageCount, FunnelStats};
