//! # Estate Core
//!
//! 부동산 투자 마켓플레이스의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 투자 물건(Property) 및 상태 관리
//! - 투자자 포지션 추적 및 원장
//! - 투자자 프로필 및 세일즈 퍼널
//! - 레코드 저장소 (메모리 / JSON 파일)
//! - 설정 관리
//! - 로깅 인프라
//! - 추천 링크 생성

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod referral;
pub mod storage;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use referral::{build_utm_url, generate_referral_code, UtmParams};
pub use storage::*;
pub use types::*;
