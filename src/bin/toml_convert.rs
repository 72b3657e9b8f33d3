use anyhow::Context;
use clap::Parser;
use contact_convert::core::ConfigProvider;
use contact_convert::utils::{logger, validation::Validate};
use contact_convert::{ContactPipeline, EtlEngine, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-convert")]
#[command(about = "Contact conversion driven by a TOML run configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "convert.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the tags from the config file
    #[arg(long)]
    tags: Option<String>,

    /// Validate the configuration and show what would run, without converting
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.verbose();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Loaded configuration from: {}", args.config);

    if let Some(tags) = args.tags {
        tracing::info!("Tags overridden to: {:?}", tags);
        config.conversion.tags = tags;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("Dry run: no file will be read or written");
        return Ok(());
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
        Err(e) => {
            tracing::error!("Conversion failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("Configuration Summary:");
    println!("  Input: {}", config.input_file());
    println!(
        "  Delimiter: {:?}",
        char::from(config.input_delimiter())
    );
    println!("  Tags: {:?}", config.tags());
    println!("  Source: {:?}", config.source_label());
    println!(
        "  Output: {}/{}",
        config.output_path().trim_end_matches('/'),
        config.output_filename()
    );
    if config.preview_rows() > 0 {
        println!("  Preview rows: {}", config.preview_rows());
    }
    println!();
}
