//! 정밀한 금융 계산을 위한 Decimal 유틸리티.
//!
//! 모든 금액과 퍼센트는 `Decimal`로 다루며, 반올림은 표시 단계에서만 수행합니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 금액 타입 (통화 단위, 예: 루블).
pub type Money = Decimal;

/// 퍼센트 타입 (12.5 = 12.5%).
pub type Percentage = Decimal;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 가장 가까운 통화 단위로 반올림합니다.
    fn round_money(&self) -> Decimal;

    /// 지정된 소수점 자릿수로 반올림합니다.
    fn round_to(&self, dp: u32) -> Decimal;

    /// 퍼센트 문자열로 변환합니다 (예: 12.6825 -> "12.68%").
    fn to_percentage_string(&self) -> String;

    /// 분모가 0이면 0을 반환하는 나눗셈.
    fn ratio_or_zero(&self, denominator: Decimal) -> Decimal;
}

impl DecimalExt for Decimal {
    fn round_money(&self) -> Decimal {
        self.round_to(0)
    }

    fn round_to(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn to_percentage_string(&self) -> String {
        format!("{:.2}%", self.round_to(2))
    }

    fn ratio_or_zero(&self, denominator: Decimal) -> Decimal {
        if denominator.is_zero() {
            Decimal::ZERO
        } else {
            *self / denominator
        }
    }
}

/// 수익률(%)을 계산합니다. 투입 금액이 0 이하면 0을 반환합니다.
pub fn roi_pct(profit: Money, invested: Money) -> Percentage {
    if invested > Decimal::ZERO {
        profit / invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
