use clap::Parser;
use partner_scout::config::crew_file::{CrewFile, CrewSettings};
use partner_scout::core::report;
use partner_scout::utils::error::{ErrorSeverity, ScoutError};
use partner_scout::utils::{logger, prompt, validation::Validate};
use partner_scout::{run_business_intelligence, CliConfig, FirecrawlClient, FirecrawlTool};
use std::sync::Arc;

fn fail(e: &ScoutError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_settings(config: &CliConfig) -> Result<CrewSettings, ScoutError> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading crew settings from: {}", path);
            let file = CrewFile::from_file(path)?;
            file.validate()?;
            Ok(file.settings())
        }
        None => Ok(CrewSettings::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = dotenvy::dotenv().ok();
    let config = CliConfig::parse();

    // logging
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting partner-scout");
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // validate flags before touching the network
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let settings = load_settings(&config).unwrap_or_else(|e| fail(&e));
    let firecrawl = config.firecrawl_config().unwrap_or_else(|e| fail(&e));

    // target website: --url, else ask on stdin
    let website = prompt::resolve_website(
        config.url.as_deref(),
        std::io::stdin().lock(),
        std::io::stdout(),
        &settings.default_website,
    )
    .unwrap_or_else(|e| fail(&e));

    // client, tool, crew
    let client = FirecrawlClient::new(firecrawl).unwrap_or_else(|e| fail(&e));
    let tool = Arc::new(FirecrawlTool::new(client).with_prompt(settings.prompt.clone()));

    match run_business_intelligence(&website, tool, &settings).await {
        Ok(output) => {
            println!("{}", report::render(&output));
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
