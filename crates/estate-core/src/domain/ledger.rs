//! 투자 원장.
//!
//! 포지션 생성/추가 투자/출금을 처리하면서 물건의 모집 금액을 함께 갱신합니다.
//! 같은 투자자와 물건 쌍에 대한 투자는 기존 포지션에 합쳐집니다.

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::position::Position;
use super::property::{Property, PropertyStatus};
use crate::error::{EstateError, EstateResult};
use crate::types::Money;

/// 포지션 목록을 소유하는 투자 원장.
#[derive(Debug, Clone, Default)]
pub struct InvestmentLedger {
    positions: Vec<Position>,
}

impl InvestmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장소에서 읽어 온 포지션으로 원장을 구성합니다.
    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// 특정 투자자의 포지션.
    pub fn positions_for<'a>(&'a self, investor_id: &'a str) -> impl Iterator<Item = &'a Position> + 'a {
        self.positions.iter().filter(move |p| p.investor_id == investor_id)
    }

    pub fn find(&self, investor_id: &str, property_id: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|p| p.investor_id == investor_id && p.property_id == property_id)
    }

    /// 물건에 자금을 투자합니다.
    ///
    /// - 물건은 `Active` 상태여야 합니다.
    /// - 신규 포지션은 최소 투자 금액 이상이어야 합니다.
    /// - 물건의 남은 모집 가능 금액을 넘을 수 없습니다.
    /// - 이미 포지션이 있으면 추가 투자로 합쳐집니다.
    pub fn commit(
        &mut self,
        investor_id: &str,
        property: &mut Property,
        amount: Money,
    ) -> EstateResult<&Position> {
        let _span = crate::portfolio_span!("commit", investor_id, property.id).entered();

        if property.status != PropertyStatus::Active {
            return Err(EstateError::InvalidInput(format!(
                "property {} is not open for investment (status: {})",
                property.id, property.status
            )));
        }

        let existing = self
            .positions
            .iter()
            .position(|p| p.investor_id == investor_id && p.property_id == property.id);

        match existing {
            Some(idx) => self.merge_into(idx, property, amount),
            None => {
                ensure_min_investment(property, amount)?;
                property.record_inflow(amount, true)?;
                let position = Position::open(investor_id, &property.id, &property.title, amount)?;
                info!(position_id = %position.id, %amount, "Opened new position");
                self.positions.push(position);
                Ok(&self.positions[self.positions.len() - 1])
            }
        }
    }

    /// 기존 포지션에 추가 투자합니다.
    ///
    /// 전액 출금된 포지션에 다시 넣는 경우는 신규 투자와 같은 규칙을 따릅니다.
    pub fn add_funds(
        &mut self,
        position_id: &str,
        property: &mut Property,
        amount: Money,
    ) -> EstateResult<&Position> {
        let idx = self.index_of(position_id, property)?;
        self.merge_into(idx, property, amount)
    }

    /// 포지션에서 출금합니다.
    ///
    /// 전액 출금된 포지션은 삭제하지 않고 금액 0인 레코드로 남습니다.
    pub fn withdraw(
        &mut self,
        position_id: &str,
        property: &mut Property,
        amount: Money,
    ) -> EstateResult<&Position> {
        let idx = self.index_of(position_id, property)?;

        let invested = self.positions[idx].amount();
        if amount > invested {
            return Err(EstateError::InsufficientFunds(format!(
                "withdrawal {} exceeds invested amount {} in position {}",
                amount, invested, position_id
            )));
        }

        let investor_left = invested - amount == Decimal::ZERO;
        property.record_outflow(amount, investor_left)?;
        self.positions[idx].withdraw(amount)?;
        debug!(%position_id, %amount, investor_left, "Withdrew funds");
        Ok(&self.positions[idx])
    }

    /// 전액 출금 후 재투자는 최소 투자 금액을 다시 확인하고 투자자 수를 되돌립니다.
    fn merge_into(
        &mut self,
        idx: usize,
        property: &mut Property,
        amount: Money,
    ) -> EstateResult<&Position> {
        let reentry = self.positions[idx].is_empty();
        if reentry {
            ensure_min_investment(property, amount)?;
        }

        property.record_inflow(amount, reentry)?;
        self.positions[idx].add_funds(amount)?;
        debug!(position_id = %self.positions[idx].id, %amount, reentry, "Added funds");
        Ok(&self.positions[idx])
    }

    fn index_of(&self, position_id: &str, property: &Property) -> EstateResult<usize> {
        let idx = self
            .positions
            .iter()
            .position(|p| p.id == position_id)
            .ok_or_else(|| EstateError::NotFound(format!("position {}", position_id)))?;

        if self.positions[idx].property_id != property.id {
            return Err(EstateError::InvalidInput(format!(
                "position {} belongs to property {}, not {}",
                position_id, self.positions[idx].property_id, property.id
            )));
        }
        Ok(idx)
    }
}

fn ensure_min_investment(property: &Property, amount: Money) -> EstateResult<()> {
    if amount < property.pricing.min_investment {
        return Err(EstateError::InvalidInput(format!(
            "amount {} is below minimum investment {} of {}",
            amount, property.pricing.min_investment, property.id
        )));
    }
    Ok(())
}
