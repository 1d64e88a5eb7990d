//! Quick Data Mapper CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use qdm_cli::cli::{Cli, Command, LogFormatArg};
use qdm_cli::commands::{run_convert, run_mappings, run_reverse, run_targets};
use qdm_cli::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let result = match &cli.command {
        Command::Convert(args) => run_convert(args, &cli.store_dir),
        Command::Reverse(args) => run_reverse(args, &cli.store_dir),
        Command::Mappings(args) => run_mappings(&args.command, &cli.store_dir),
        Command::Targets(args) => run_targets(args),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
