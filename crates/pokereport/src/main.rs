//! Pokereport entry point.
//!
//! With no arguments, reports on pikachu in French to `pokemon_report.pdf`.

use clap::Parser;

use pokereport::cli::{Cli, Command};
use pokereport::config_handlers::handle_config_command;
use pokereport::{ReportRequest, ReportWorkflow, failure_hint};
use pokereport_core::{ConfigManager, ReportConfig};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,pokereport=debug,pokereport_core=debug,pokereport_clients=debug,pokereport_render=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command_or_default() {
        Command::Generate(args) => {
            let mut config = ReportConfig::load(cli.config.as_deref())?;
            args.apply(&mut config);
            config.validate()?;

            if config.translate.access_token.is_empty() {
                tracing::warn!("No translation access token configured; requests will be unauthenticated");
            }

            let workflow = ReportWorkflow::from_config(&config);
            let request = ReportRequest::from_config(&config);

            match workflow.run(request).await {
                Ok(outcome) => {
                    tracing::info!(run_id = %outcome.run_id, "Report run completed");
                    println!(
                        "{} ({}) written to {}",
                        outcome.translated_name,
                        outcome.creature.name,
                        outcome.output.display()
                    );
                }
                Err(e) => {
                    tracing::error!(remote = e.is_remote(), "Report run failed: {}", e);
                    if let Some(hint) = failure_hint(&e) {
                        eprintln!("hint: {hint}");
                    }
                    return Err(e.into());
                }
            }
        }
        Command::Config { action } => handle_config_command(cli.config.as_deref(), action)?,
    }

    Ok(())
}
