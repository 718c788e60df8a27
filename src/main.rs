//! Health Advisor - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use health_advisor::{
    cli::{Args, Commands, Config, Verbosity},
    doctor::Doctor,
    models::Recommender,
    repl::{DisplayManager, ReplSession},
    shell::Shell,
};

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load configuration, falling back to defaults when the file is unusable
///
/// Command-line overrides are checked too; a bad override is an error.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "using default configuration");
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            let mut config = Config::default();
            config.apply_env();
            config
        }
    };

    config.apply_overrides(args.model.as_deref(), args.no_animation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbosity());

    let config = load_config(&args)?;

    match args.command {
        Some(Commands::Doctor) => {
            let doctor = Doctor::new(config);
            let checks = doctor.run_diagnostics().await;
            Doctor::display_results(&checks);

            if !Doctor::overall_status(&checks) {
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            if let Some(path) = args.config.clone().or_else(Config::default_path) {
                println!("{} {}\n", "Config file:".bold(), path.display());
            }
            println!("{}", config.to_masked_toml()?);
        }
        None => {
            let recommender = Recommender::from_config(&config);
            let shell = Shell::new(recommender);
            let display = DisplayManager::new(config.display.color_output, config.display.animate);

            let mut session = ReplSession::new(shell, display)?;
            session
                .run(env!("CARGO_PKG_VERSION"), config.model_id())
                .await?;

            println!("{}", "Goodbye!".green());
        }
    }

    Ok(())
}
