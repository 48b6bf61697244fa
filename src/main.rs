use anyhow::Context;
use clap::Parser;
use raw_locator::utils::logger;
use raw_locator::{CliConfig, LocalCopier, LocalDirectory, Locator, LocatorError, MatchReport, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting raw-locator");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config).await {
        Ok(report) => print_report(&report, &config)?,
        Err(e) => {
            tracing::error!(
                "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<MatchReport, LocatorError> {
    tracing::info!("📁 Loading settings from: {}", config.conf.display());

    // 命令列參數優先於設定檔
    let directories = Settings::load_or_default(&config.conf)?
        .with_overrides(config.source.as_deref(), config.destination.as_deref())
        .directories()?;

    tracing::debug!("Source: {}", directories.source.display());
    tracing::debug!("Destination: {}", directories.destination.display());

    let locator = Locator::new(LocalDirectory::new(&directories.source));
    let copier = config.copy.then_some(LocalCopier);

    locator
        .run(&config.timestamps, &directories, copier.as_ref())
        .await
}

fn print_report(report: &MatchReport, config: &CliConfig) -> anyhow::Result<()> {
    if config.json {
        let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Found matches: {:?}", report.matched);
    if config.copy {
        let copied: Vec<String> = report
            .copied
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        println!("Files copied: {:?}", copied);
    }
    Ok(())
}
