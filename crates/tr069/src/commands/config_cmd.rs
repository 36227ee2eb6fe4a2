//! Config subcommand handlers.

use tracing::info;

use tr069_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::Settings;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let settings = Settings::resolve(global, &cfg);
            output::print_output(&render_config(&cfg, settings.output)?, settings.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }
            let written = config::save_config(&Config::default())?;
            info!(path = %written.display(), "wrote default config");
            output::print_output(
                &format!("Config written to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}

/// Resolved config as TOML, or in the structured format asked for.
fn render_config(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cfg)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(cfg)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(cfg)?),
        OutputFormat::Table | OutputFormat::Xml => toml::to_string_pretty(cfg).map_err(|e| {
            CliError::Config(config::ConfigError::Serialization(e))
        }),
    }
}
