use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use order_reports::config::Config;
use order_reports::core::StaticAccess;
use order_reports::orders::JsonFileOrderRepository;
use order_reports::reports::ReportService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the sales report for an inclusive date range as JSON.
///
/// Leaving either date out reports on every order.
#[derive(Debug, Parser)]
#[command(name = "order-reports", version)]
struct Cli {
    /// First day of the period (YYYY-MM-DD or RFC 3339)
    start: Option<String>,

    /// Last day of the period (YYYY-MM-DD or RFC 3339)
    end: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let order_repo = JsonFileOrderRepository::new(config.store.orders_file.clone());

    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Reading orders from: {}", order_repo.path().display());

    let service = ReportService::new(
        Arc::new(order_repo),
        Arc::new(StaticAccess::new(config.security.admin_access)),
        config.report.options()?,
    );

    let report = service
        .generate_report(cli.start.as_deref(), cli.end.as_deref())
        .await
        .context("Failed to generate sales report")?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
