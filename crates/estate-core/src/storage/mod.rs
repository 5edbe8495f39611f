//! 레코드 저장소.
//!
//! 계산 로직은 저장소를 직접 다루지 않습니다. 호출 측이 저장소에서 레코드를 읽어
//! 분석 함수에 넘기고, 결과를 다시 저장합니다.
//!
//! - [`InMemoryStore`]: 테스트 및 단일 프로세스용
//! - [`JsonFileStore`]: 디렉토리 안의 JSON 파일 (`properties.json`, `positions.json`, `investors.json`)

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use std::collections::HashMap;

use crate::domain::{Investor, Position, Property};
use crate::error::EstateResult;

/// 물건 저장소.
pub trait PropertyRepository {
    /// 모든 물건을 카탈로그 순서대로 읽습니다.
    fn load_properties(&self) -> EstateResult<Vec<Property>>;

    /// ID로 물건을 찾습니다.
    fn get_property(&self, id: &str) -> EstateResult<Option<Property>> {
        Ok(self.load_properties()?.into_iter().find(|p| p.id == id))
    }

    /// 물건 하나를 추가하거나 같은 ID의 물건을 교체합니다.
    fn save_property(&mut self, property: Property) -> EstateResult<()> {
        let mut properties = self.load_properties()?;
        match properties.iter_mut().find(|p| p.id == property.id) {
            Some(existing) => *existing = property,
            None => properties.push(property),
        }
        self.save_properties(&properties)
    }

    /// 전체 물건 목록을 저장합니다.
    fn save_properties(&mut self, properties: &[Property]) -> EstateResult<()>;

    /// ID를 키로 하는 카탈로그 스냅샷.
    fn property_map(&self) -> EstateResult<HashMap<String, Property>> {
        Ok(self
            .load_properties()?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect())
    }
}

/// 포지션 저장소.
pub trait PositionRepository {
    fn load_positions(&self) -> EstateResult<Vec<Position>>;

    /// 특정 투자자의 포지션.
    fn load_positions_for(&self, investor_id: &str) -> EstateResult<Vec<Position>> {
        Ok(self
            .load_positions()?
            .into_iter()
            .filter(|p| p.investor_id == investor_id)
            .collect())
    }

    fn save_positions(&mut self, positions: &[Position]) -> EstateResult<()>;
}

/// 투자자 저장소.
pub trait InvestorRepository {
    fn load_investors(&self) -> EstateResult<Vec<Investor>>;

    fn get_investor(&self, id: &str) -> EstateResult<Option<Investor>> {
        Ok(self.load_investors()?.into_iter().find(|i| i.id == id))
    }

    fn save_investor(&mut self, investor: Investor) -> EstateResult<()>;
}
