use clap::Parser;
use purchase_ingest::utils::{logger, validation::Validate};
use purchase_ingest::{status_line, CliConfig, IngestionCoordinator, OwnerId, RestStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting purchase-ingest");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let manual = config.manual_input();
    let source = match config.tabular_source() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ could not read file: {}", e);
            std::process::exit(2);
        }
    };

    let owner = OwnerId::new(config.owner.clone());
    let store = RestStore::new(config.endpoint.clone(), config.api_key.clone());
    let coordinator = IngestionCoordinator::new(store);

    let outcome = coordinator.ingest(Some(&owner), &manual, source.as_ref()).await;
    let status = status_line(&outcome);

    if outcome.committed {
        println!("✅ {}", status);
        for error in &outcome.rejected {
            match error.source_row_index {
                Some(index) => eprintln!("⚠️ skipped row {}: {}", index, error.message),
                None => eprintln!("⚠️ skipped: {}", error.message),
            }
        }
    } else {
        eprintln!("❌ {}", status);
        std::process::exit(1);
    }

    Ok(())
}
