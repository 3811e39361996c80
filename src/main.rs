use clap::Parser;
use outlet_import::core::{importer, loader};
use outlet_import::utils::{logger, validation::Validate};
use outlet_import::{BackendSettings, CliConfig, ImportEngine, RestBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting outlet-import CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match BackendSettings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load settings: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    println!("{}", "=".repeat(80));
    println!("Outlet Import Tool");
    println!("{}", "=".repeat(80));
    println!();

    println!("Loading outlets from {}...", cli.input);
    let loaded = match loader::load_outlets(&cli.input) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("❌ Failed to read {}: {}", cli.input, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} outlets from {}", loaded.records.len(), cli.input);
    if loaded.skipped_rows > 0 {
        println!(
            "⚠ Skipped {} incomplete row(s) (missing store code, short name or store name)",
            loaded.skipped_rows
        );
    }

    if loaded.records.is_empty() {
        eprintln!("ERROR: No outlets found in input file!");
        return Ok(());
    }

    println!("\nProcessing {} outlets...", loaded.records.len());
    println!("{}", "=".repeat(80));

    let default_password = settings.default_password.clone();
    let backend = RestBackend::new(settings);
    let engine = ImportEngine::new(backend, default_password.clone());

    let stats = engine.run(&loaded.records).await;

    importer::print_summary(&stats, loaded.skipped_rows, &default_password);

    Ok(())
}
