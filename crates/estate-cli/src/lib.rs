//! 마켓플레이스 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 수익 계산기
//! - 투자자 포트폴리오 보고서
//! - 물건 추천
//! - 브로커 대시보드 통계
//! - 투자 실행 및 추천 링크 생성

pub mod commands;

pub use commands::OutputFormat;
