mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

/// Build a deck of HTML frames from flags, then serve, render or list it.
#[derive(Parser, Debug)]
#[command(name = "frameforge", version, about = "Frame deck builder and server")]
struct Cli {
    /// Stdout format for `frames` listings and the `serve` listening line.
    /// `render` always prints raw HTML. Default: table on a terminal, json
    /// otherwise.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log line format on stderr.
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level on stderr. Frame registration logs at debug, store
    /// mutations at trace.
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);
    tracing::debug!(command = ?cli.command, "starting");

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let code = match cmd::run(cli.command, format) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            err.code
        }
    };
    std::process::exit(code);
}
