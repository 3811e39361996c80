pub mod backend;
pub mod importer;
pub mod loader;

pub use crate::domain::model::{ImportStats, LoadedOutlets, OutletRecord, UpsertOutcome};
pub use crate::domain::ports::{ConfigProvider, OutletBackend};
pub use crate::utils::error::Result;
