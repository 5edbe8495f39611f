//! 마켓플레이스 시스템의 에러 타입.
//!
//! 이 모듈은 도메인 모델과 저장소 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error)]
pub enum EstateError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),

    /// 잔액 부족 (포지션 금액을 초과하는 출금 등)
    #[error("잔액 부족: {0}")]
    InsufficientFunds(String),

    /// 허용되지 않는 상태 전이
    #[error("허용되지 않는 상태 전이: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// 저장소 에러
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 도메인 작업을 위한 Result 타입.
pub type EstateResult<T> = Result<T, EstateError>;

impl EstateError {
    /// 호출 측 입력 검증 실패인지 확인합니다.
    ///
    /// 검증 실패는 호출 지점에서 수정해야 하는 로컬 에러이며 재시도 대상이 아닙니다.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EstateError::InvalidInput(_)
                | EstateError::InsufficientFunds(_)
                | EstateError::InvalidTransition { .. }
        )
    }
}

impl From<serde_json::Error> for EstateError {
    fn from(err: serde_json::Error) -> Self {
        EstateError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for EstateError {
    fn from(err: std::io::Error) -> Self {
        EstateError::Storage(err.to_string())
    }
}
