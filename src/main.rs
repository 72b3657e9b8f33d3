use clap::Parser;
use contact_convert::utils::{logger, validation::Validate};
use contact_convert::{CliConfig, ContactPipeline, EtlEngine, EtlError, LocalStorage};

fn report_failure(e: &EtlError) -> ! {
    tracing::error!("Conversion failed: {} (Severity: {:?})", e, e.severity());
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contact-convert");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    let storage = LocalStorage::working_dir();
    let pipeline = ContactPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            if let Some(preview) = &outcome.preview {
                println!("{}", preview);
            }
            println!(
                "Converted {} contacts -> {}",
                outcome.rows_written, outcome.output_path
            );
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}
