pub mod config;
pub mod error;
pub mod types;

pub use config::{BonusConfig, CategoryRule};
pub use error::{BonusError, Result};
pub use types::{ActorId, ItemCategory, Tick};
