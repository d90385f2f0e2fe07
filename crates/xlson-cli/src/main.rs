pub mod convert;
mod logging;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;
use std::process::ExitCode;

use convert::{Destination, convert_file, render_form, write_form};
use logging::{LogConfig, LogFormat, init_logging};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    name = "xlson",
    author,
    version,
    about = "xlson - XLSForm to native form JSON",
    long_about = "Converts a parsed XLSForm survey (the JSON produced by the XLSForm parser) into the native form JSON used by the mobile client"
)]
struct Cli {
    /// Path to the parsed XLSForm survey JSON.
    #[arg(value_name = "XLSFORM")]
    xlsform: PathBuf,
    /// Write the native form to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
    /// Adjust log verbosity (-v for info, -vv for debug, -q to silence warnings).
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let form = convert_file(&cli.xlsform)?;
    let rendered = render_form(&form, cli.compact)?;
    let destination = match &cli.output {
        Some(path) => Destination::File(path.clone()),
        None => Destination::Stdout,
    };
    write_form(&rendered, &destination)?;
    Ok(())
}

fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: cli.log_format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_verbosity_and_format() {
        let cli = Cli::try_parse_from(["xlson", "-vv", "--log-format", "json", "survey.json"])
            .expect("parse");
        let config = log_config_from_cli(&cli);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.use_env_filter);
        assert_eq!(
            config.level_filter,
            tracing::level_filters::LevelFilter::DEBUG
        );
    }
}
