mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, ColorMode, Command};
use crate::commands::Settings;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_diagnostics(color: ColorMode) {
    let color = output::should_color(color);
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(miette::MietteHandlerOpts::new().color(color).build())
    }));
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands run before the config file is loaded
        Command::Config(args) => {
            init_diagnostics(cli.global.color.unwrap_or(ColorMode::Auto));
            commands::config_cmd::handle(&args, &cli.global)
        }

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "tr069", &mut std::io::stdout());
            Ok(())
        }

        Command::Man(args) => commands::man::handle(&args, cli.global.quiet),

        cmd => {
            let cfg = tr069_config::load_config()?;
            let settings = Settings::resolve(&cli.global, &cfg);
            init_diagnostics(settings.color);
            tracing::debug!(command = ?cmd, ?settings, "dispatching command");
            commands::dispatch(cmd, &settings)
        }
    }
}
