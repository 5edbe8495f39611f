//! 복리 수익 예측.
//!
//! 연 수익률을 월 복리로 적용해 일시금 투자의 미래 가치를 계산합니다.
//!
//! ```text
//! monthly_rate = annual_rate_pct / 100 / 12
//! final_amount = principal × (1 + monthly_rate) ^ months
//! profit       = final_amount − principal
//! roi_pct      = profit / principal × 100
//! ```
//!
//! 결과는 전체 정밀도로 반환되며, 반올림은 표시 단계의 책임입니다
//! ([`ProjectionResult::rounded`]).

use estate_core::{DecimalExt, Money, Percentage};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// 수익 예측 오류.
///
/// 호출 지점에서 수정해야 하는 입력 검증 실패입니다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// 잘못된 인자
    #[error("잘못된 인자: {0}")]
    InvalidArgument(String),
}

/// 수익 예측 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub final_amount: Money,
    pub profit: Money,
    pub roi_percent: Percentage,
}

impl ProjectionResult {
    /// 표시용으로 반올림한 결과 (금액은 통화 단위, 수익률은 소수점 2자리).
    pub fn rounded(&self) -> Self {
        Self {
            final_amount: self.final_amount.round_money(),
            profit: self.profit.round_money(),
            roi_percent: self.roi_percent.round_to(2),
        }
    }
}

/// 성장 곡선의 한 지점.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// 경과 개월 수 (1부터 시작)
    pub month_index: u32,
    /// 해당 시점의 평가 금액
    pub value: Money,
}

/// 월 복리 수익 예측기.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnProjector;

impl ReturnProjector {
    pub fn new() -> Self {
        Self
    }

    /// 일시금 투자의 미래 가치를 예측합니다.
    ///
    /// # 인자
    ///
    /// * `principal` - 투자 원금 (> 0)
    /// * `months` - 투자 기간 (개월, > 0). 연 단위는 호출 측에서 개월로 변환해야 합니다.
    /// * `annual_rate_pct` - 연 수익률 (%, >= 0)
    ///
    /// # 에러
    ///
    /// 인자가 범위를 벗어나거나 복리 계산이 표현 범위를 넘으면 `InvalidArgument`.
    pub fn project(
        &self,
        principal: Money,
        months: u32,
        annual_rate_pct: Percentage,
    ) -> Result<ProjectionResult, ProjectionError> {
        validate(principal, months, annual_rate_pct)?;

        let final_amount = value_at(principal, monthly_rate(annual_rate_pct), months)?;
        let profit = final_amount - principal;

        Ok(ProjectionResult {
            final_amount,
            profit,
            roi_percent: profit / principal * Decimal::ONE_HUNDRED,
        })
    }

    /// 1개월부터 `months`개월까지 각 시점의 평가 금액.
    ///
    /// 각 지점은 [`project`](Self::project)와 같은 공식으로 독립적으로 계산되므로
    /// 마지막 지점의 값은 `project`의 `final_amount`와 같습니다.
    pub fn project_series(
        &self,
        principal: Money,
        months: u32,
        annual_rate_pct: Percentage,
    ) -> Result<Vec<ProjectionPoint>, ProjectionError> {
        validate(principal, months, annual_rate_pct)?;

        let rate = monthly_rate(annual_rate_pct);
        (1..=months)
            .map(|month_index| {
                Ok(ProjectionPoint {
                    month_index,
                    value: value_at(principal, rate, month_index)?,
                })
            })
            .collect()
    }
}

fn validate(principal: Money, months: u32, annual_rate_pct: Percentage) -> Result<(), ProjectionError> {
    if principal <= Decimal::ZERO {
        return Err(ProjectionError::InvalidArgument(format!(
            "principal must be positive: {}",
            principal
        )));
    }
    if months == 0 {
        return Err(ProjectionError::InvalidArgument(
            "months must be a positive integer".to_string(),
        ));
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(ProjectionError::InvalidArgument(format!(
            "annual rate must be non-negative: {}",
            annual_rate_pct
        )));
    }
    Ok(())
}

fn monthly_rate(annual_rate_pct: Percentage) -> Decimal {
    annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12)
}

fn value_at(principal: Money, monthly_rate: Decimal, months: u32) -> Result<Money, ProjectionError> {
    (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(months))
        .and_then(|growth| principal.checked_mul(growth))
        .ok_or_else(|| {
            ProjectionError::InvalidArgument(format!(
                "compounding over {} months overflows",
                months
            ))
        })
}
