//! Admission-result parser CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use admit_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg, ParseArgs};
use admit_cli::commands::{load_catalog, parse_lines, read_input_lines, to_json_lines};
use admit_cli::logging::{LogConfig, LogFormat, init_logging};
use admit_cli::summary::{print_catalog_summary, print_parse_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Parse(args) => run_parse(&cli, args),
        Command::Catalog => run_catalog(&cli),
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run_parse(cli: &Cli, args: &ParseArgs) -> Result<i32> {
    let catalog = load_catalog(cli.standards_dir.as_deref())?;
    let lines = read_input_lines(args)?;
    let outcome = parse_lines(&catalog, &lines);
    match args.format {
        OutputFormatArg::Table => print_parse_table(&outcome),
        OutputFormatArg::Json => {
            for line in to_json_lines(&outcome)? {
                println!("{line}");
            }
        }
    }
    Ok(outcome.exit_code(args.fail_on_unmatched))
}

fn run_catalog(cli: &Cli) -> Result<i32> {
    let catalog = load_catalog(cli.standards_dir.as_deref())?;
    print_catalog_summary(&catalog);
    Ok(0)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
