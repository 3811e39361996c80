pub mod settings;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "outlet-import")]
#[command(about = "Imports outlets and per-outlet user accounts from a spreadsheet into the backend")]
pub struct CliConfig {
    /// Spreadsheet with the outlet list (.xlsx or .csv); row 1 is the header
    #[arg(long, default_value = "Outlet List 2026.xlsx")]
    pub input: String,

    /// TOML settings file; OUTLET_* environment variables override its values
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, &["xlsx", "csv"])?;
        Ok(())
    }
}
