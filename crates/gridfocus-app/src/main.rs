mod cli;
mod script;

use std::process::ExitCode;

use gridfocus_common::{ConfigError, GridFocusError};
use gridfocus_config::{toml_loader, validation, GridFocusConfig};
use tracing_subscriber::EnvFilter;

use cli::Command;

/// Load the config named on the command line (strict) or the platform
/// default (falls back to defaults, returning the error for logging later).
fn load_config(
    args: &cli::Args,
) -> Result<(GridFocusConfig, Option<ConfigError>), GridFocusError> {
    match args.config {
        Some(ref path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok((config, None))
        }
        None => match gridfocus_config::load_config() {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((GridFocusConfig::default(), Some(e))),
        },
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "gridfocus=info".parse().expect("static directive")),
            ),
        )
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), GridFocusError> {
    let line = serde_json::to_string(value).map_err(|e| GridFocusError::Other(e.to_string()))?;
    println!("{line}");
    Ok(())
}

async fn execute(args: cli::Args, config: GridFocusConfig) -> Result<(), GridFocusError> {
    let (steps, apply_lag) = match args.command {
        Command::Layouts => {
            for report in script::layout_reports() {
                print_json(&report)?;
            }
            return Ok(());
        }
        Command::Run { steps, apply_lag } => {
            let steps = steps
                .iter()
                .map(|s| s.parse::<script::Step>())
                .collect::<Result<Vec<_>, _>>()?;
            (steps, apply_lag)
        }
        Command::Keys { keys, apply_lag } => {
            (script::steps_for_keys(&config.keybinds, &keys)?, apply_lag)
        }
    };

    tracing::debug!(steps = steps.len(), apply_lag, "running script");
    for report in script::run_steps(&steps, config.settle, apply_lag).await {
        print_json(&report)?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = load_config(&args);
    let directive = match (&args.log_level, &config) {
        (Some(level), _) => level.clone(),
        (None, Ok((config, _))) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "gridfocus=info".to_string(),
    };
    init_logging(&directive);

    let config = match config {
        Ok((config, fallback)) => {
            if let Some(e) = fallback {
                tracing::warn!("Config load failed, using defaults: {e}");
            }
            config
        }
        Err(e) => {
            tracing::error!("invalid config: {e}");
            return ExitCode::from(2);
        }
    };

    match execute(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}
