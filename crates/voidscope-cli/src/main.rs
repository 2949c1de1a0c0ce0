mod cli;
mod commands;
mod config;
mod error;
mod explain;
mod logging;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🔬 VoidScope CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let model_override = match &cli.command {
        Commands::Explain(args) => args.model.as_deref(),
        _ => None,
    };
    let app_config = config::build_config(&cli.config, model_override)?;
    debug!(
        "Resolved configuration: precision={}, model={}",
        app_config.generation.precision(), app_config.explain.model
    );

    let rendered = match cli.command {
        Commands::Structure(args) => {
            info!("Dispatching to 'structure' command.");
            commands::structure::run(args, &app_config)
        }
        Commands::Voids(args) => {
            info!("Dispatching to 'voids' command.");
            commands::voids::run(args, &app_config)
        }
        Commands::Inspect(args) => {
            info!("Dispatching to 'inspect' command.");
            commands::inspect::run(args, &app_config)
        }
        Commands::Explain(args) => {
            info!("Dispatching to 'explain' command.");
            commands::explain::run(args, &app_config).await
        }
    };

    match rendered {
        Ok(text) => {
            println!("{}", text.trim_end());
            info!("✅ Command completed successfully.");
            Ok(())
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
            Err(e)
        }
    }
}
