//! 투자자 포지션 추적.
//!
//! 이 모듈은 투자자가 하나의 물건에 보유한 지분을 정의합니다:
//! - `Position` - 투자 금액, 현재 가치 및 파생 손익/수익률
//!
//! 손익(`profit`)과 수익률(`roi`)은 항상 `recompute`를 통해서만 갱신됩니다.
//! 저장된 레코드를 읽을 때도 두 값은 다시 계산합니다.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EstateError, EstateResult};
use crate::types::{roi_pct, Money, Percentage};

/// 투자자의 물건 지분 (도메인 용어로 "UserInvestment").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PositionRecord")]
pub struct Position {
    /// 포지션 ID
    pub id: String,
    /// 투자자 ID
    #[serde(rename = "userId")]
    pub investor_id: String,
    /// 물건 ID
    pub property_id: String,
    /// 투자 시점의 물건 제목
    pub property_title: String,
    /// 투자 금액
    amount: Money,
    /// 현재 평가 가치
    current_value: Money,
    /// 손익 (= current_value - amount)
    profit: Money,
    /// 수익률 (%)
    roi: Percentage,
    /// 최초 투자 시각
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// 저장소에서 읽어 온 원시 포지션 레코드.
///
/// 저장된 `profit`/`roi`는 무시하고 `Position`으로 변환할 때 다시 계산합니다.
/// 음수 금액은 `from_parts`와 같이 거부됩니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionRecord {
    id: String,
    #[serde(alias = "investorId")]
    user_id: String,
    property_id: String,
    #[serde(default)]
    property_title: String,
    amount: Money,
    current_value: Money,
    #[serde(default = "Utc::now")]
    date: DateTime<Utc>,
}

impl TryFrom<PositionRecord> for Position {
    type Error = EstateError;

    fn try_from(record: PositionRecord) -> EstateResult<Self> {
        let position = Self::from_parts(
            record.id,
            record.user_id,
            record.property_id,
            record.amount,
            record.current_value,
        )?;
        Ok(Self {
            property_title: record.property_title,
            created_at: record.date,
            ..position
        })
    }
}

impl Position {
    /// 새 포지션을 엽니다. 현재 가치는 투자 금액으로 시작합니다.
    pub fn open(
        investor_id: impl Into<String>,
        property_id: impl Into<String>,
        property_title: impl Into<String>,
        amount: Money,
    ) -> EstateResult<Self> {
        ensure_positive(amount, "investment amount")?;

        let mut position = Self {
            id: Uuid::new_v4().to_string(),
            investor_id: investor_id.into(),
            property_id: property_id.into(),
            property_title: property_title.into(),
            amount,
            current_value: amount,
            profit: Decimal::ZERO,
            roi: Decimal::ZERO,
            created_at: Utc::now(),
        };
        position.recompute();
        Ok(position)
    }

    /// 기존 값으로 포지션을 구성합니다 (가져오기, 테스트 용도).
    pub fn from_parts(
        id: impl Into<String>,
        investor_id: impl Into<String>,
        property_id: impl Into<String>,
        amount: Money,
        current_value: Money,
    ) -> EstateResult<Self> {
        if amount < Decimal::ZERO {
            return Err(EstateError::InvalidInput(format!(
                "amount must be non-negative: {}",
                amount
            )));
        }
        if current_value < Decimal::ZERO {
            return Err(EstateError::InvalidInput(format!(
                "current value must be non-negative: {}",
                current_value
            )));
        }

        let mut position = Self {
            id: id.into(),
            investor_id: investor_id.into(),
            property_id: property_id.into(),
            property_title: String::new(),
            amount,
            current_value,
            profit: Decimal::ZERO,
            roi: Decimal::ZERO,
            created_at: Utc::now(),
        };
        position.recompute();
        Ok(position)
    }

    /// 물건 제목 스냅샷을 설정합니다.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.property_title = title.into();
        self
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn current_value(&self) -> Money {
        self.current_value
    }

    pub fn profit(&self) -> Money {
        self.profit
    }

    /// 수익률(%). 투자 금액이 0이면 0입니다.
    pub fn roi(&self) -> Percentage {
        self.roi
    }

    /// 추가 투자. 투자 금액과 현재 가치가 같은 금액만큼 증가합니다.
    pub fn add_funds(&mut self, amount: Money) -> EstateResult<()> {
        ensure_positive(amount, "additional amount")?;

        self.amount += amount;
        self.current_value += amount;
        self.recompute();
        Ok(())
    }

    /// 출금. 투자 금액을 `amount`만큼 줄이고 현재 가치는 같은 비율로 줄여 수익률을 유지합니다.
    ///
    /// 투자 금액을 초과하는 출금은 `InsufficientFunds`입니다.
    pub fn withdraw(&mut self, amount: Money) -> EstateResult<()> {
        ensure_positive(amount, "withdrawal amount")?;
        if amount > self.amount {
            return Err(EstateError::InsufficientFunds(format!(
                "withdrawal {} exceeds invested amount {} in position {}",
                amount, self.amount, self.id
            )));
        }

        let remaining = self.amount - amount;
        self.current_value = if self.amount.is_zero() {
            Decimal::ZERO
        } else {
            self.current_value * remaining / self.amount
        };
        self.amount = remaining;
        self.recompute();
        Ok(())
    }

    /// 현재 평가 가치를 갱신합니다.
    pub fn revalue(&mut self, current_value: Money) -> EstateResult<()> {
        if current_value < Decimal::ZERO {
            return Err(EstateError::InvalidInput(format!(
                "current value must be non-negative: {}",
                current_value
            )));
        }
        self.current_value = current_value;
        self.recompute();
        Ok(())
    }

    /// 전액 출금된 포지션인지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.amount.is_zero()
    }

    fn recompute(&mut self) {
        self.profit = self.current_value - self.amount;
        self.roi = roi_pct(self.profit, self.amount);
    }
}

fn ensure_positive(amount: Money, what: &str) -> EstateResult<()> {
    if amount <= Decimal::ZERO {
        return Err(EstateError::InvalidInput(format!(
            "{} must be positive: {}",
            what, amount
        )));
    }
    Ok(())
}
