//! 메모리 저장소.

use super::{InvestorRepository, PositionRepository, PropertyRepository};
use crate::domain::{Investor, Position, Property};
use crate::error::EstateResult;

/// 세 가지 레코드를 모두 메모리에 보관하는 저장소.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    properties: Vec<Property>,
    positions: Vec<Position>,
    investors: Vec<Investor>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = positions;
        self
    }

    pub fn with_investors(mut self, investors: Vec<Investor>) -> Self {
        self.investors = investors;
        self
    }
}

impl PropertyRepository for InMemoryStore {
    fn load_properties(&self) -> EstateResult<Vec<Property>> {
        Ok(self.properties.clone())
    }

    fn save_properties(&mut self, properties: &[Property]) -> EstateResult<()> {
        self.properties = properties.to_vec();
        Ok(())
    }
}

impl PositionRepository for InMemoryStore {
    fn load_positions(&self) -> EstateResult<Vec<Position>> {
        Ok(self.positions.clone())
    }

    fn save_positions(&mut self, positions: &[Position]) -> EstateResult<()> {
        self.positions = positions.to_vec();
        Ok(())
    }
}

impl InvestorRepository for InMemoryStore {
    fn load_investors(&self) -> EstateResult<Vec<Investor>> {
        Ok(self.investors.clone())
    }

    fn save_investor(&mut self, investor: Investor) -> EstateResult<()> {
        match self.investors.iter_mut().find(|i| i.id == investor.id) {
            Some(existing) => *existing = investor,
            None => self.investors.push(investor),
        }
        Ok(())
    }
}
