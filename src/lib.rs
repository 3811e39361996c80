pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{settings::BackendSettings, CliConfig};
pub use core::{backend::RestBackend, importer::ImportEngine};
pub use utils::error::{ImportError, Result};
