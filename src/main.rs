use clap::Parser;
use team_builder::app::repl;
use team_builder::core::session::SessionSettings;
use team_builder::core::ConfigProvider;
use team_builder::utils::error::ErrorSeverity;
use team_builder::utils::{logger, validation::Validate};
use team_builder::{Catalog, CliConfig, LocalStorage, TeamError, TeamSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting team-builder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.load_toml() {
        Ok(Some(config)) => {
            tracing::info!("📁 Configuration loaded from {:?}", cli.config);
            start(config).await
        }
        Ok(None) => start(cli).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ team-builder failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn start<C: ConfigProvider + Validate>(config: C) -> Result<(), TeamError> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let catalog = match config.catalog_path() {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(
        "📚 {} characters available, import policy: {}",
        catalog.len(),
        config.import_policy()
    );

    let storage = LocalStorage::new(config.output_path().to_string());
    let mut session = TeamSession::new(catalog, storage, SessionSettings::from_config(&config));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut session, stdin, tokio::io::stdout()).await?;

    tracing::info!("👋 Bye");
    Ok(())
}
