//! 마켓플레이스 운영을 위한 도메인 모델.

mod investor;
mod ledger;
mod position;
mod property;
mod recommendation;

pub use investor::*;
pub use ledger::*;
pub use position::*;
pub use property::*;
pub use recommendation::*;

#[cfg(test)]
pub(crate) use property::fixtures;
