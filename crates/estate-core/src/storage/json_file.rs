//! JSON 파일 저장소.
//!
//! 브라우저 로컬 스토리지와 같은 구조의 JSON 배열을 컬렉션별 파일로 보관합니다.
//! 파일이 없으면 빈 컬렉션으로 취급합니다.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{InvestorRepository, PositionRepository, PropertyRepository};
use crate::domain::{Investor, Position, Property};
use crate::error::{EstateError, EstateResult};

const PROPERTIES_FILE: &str = "properties.json";
const POSITIONS_FILE: &str = "positions.json";
const INVESTORS_FILE: &str = "investors.json";

/// 디렉토리 기반 JSON 저장소.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> EstateResult<Vec<T>> {
        let path = self.data_dir.join(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Collection file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(EstateError::Storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            EstateError::Serialization(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    fn write_collection<T: Serialize>(&self, file: &str, items: &[T]) -> EstateResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.data_dir.join(file);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(items)?)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), count = items.len(), "Collection saved");
        Ok(())
    }
}

impl PropertyRepository for JsonFileStore {
    fn load_properties(&self) -> EstateResult<Vec<Property>> {
        self.read_collection(PROPERTIES_FILE)
    }

    fn save_properties(&mut self, properties: &[Property]) -> EstateResult<()> {
        self.write_collection(PROPERTIES_FILE, properties)
    }
}

impl PositionRepository for JsonFileStore {
    fn load_positions(&self) -> EstateResult<Vec<Position>> {
        self.read_collection(POSITIONS_FILE)
    }

    fn save_positions(&mut self, positions: &[Position]) -> EstateResult<()> {
        self.write_collection(POSITIONS_FILE, positions)
    }
}

impl InvestorRepository for JsonFileStore {
    fn load_investors(&self) -> EstateResult<Vec<Investor>> {
        self.read_collection(INVESTORS_FILE)
    }

    fn save_investor(&mut self, investor: Investor) -> EstateResult<()> {
        let mut investors = self.load_investors()?;
        match investors.iter_mut().find(|i| i.id == investor.id) {
            Some(existing) => *existing = investor,
            None => investors.push(investor),
        }
        self.write_collection(INVESTORS_FILE, &investors)
    }
}
