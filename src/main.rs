//! `spark-smoke`: check that the engine can start, read a text source and
//! run filter-and-count queries. Prints `Lines with a: <N>, lines with b: <M>`.
//!
//! With no arguments it reads `/abc` as app `SimpleApp`. Settings come from
//! `SPARK_SMOKE_*` environment variables, then from flags. Logs go to stderr
//! (filter with `RUST_LOG`).

use std::process::ExitCode;

use clap::Parser;
use spark_smoke::{SmokeConfig, run};
use tracing::error;

#[derive(Debug, Parser)]
#[command(
    name = "spark-smoke",
    version,
    disable_help_subcommand = true,
    about = "Count lines containing each substring in a text source"
)]
struct Cli {
    #[arg(value_name = "INPUT", help = "Text file or directory to read")]
    input: Option<String>,
    #[arg(long = "app-name", help = "Application name shown by the engine")]
    app_name: Option<String>,
    #[arg(long, help = "Engine master URL")]
    master: Option<String>,
    #[arg(
        long = "needle",
        value_name = "SUBSTRING",
        help = "Substring to count, repeat as needed in report order (replaces the defaults)"
    )]
    needles: Vec<String>,
    #[arg(long = "line-sep", help = "Explicit line separator")]
    line_sep: Option<String>,
    #[arg(long, help = "Read each file as a single record")]
    wholetext: bool,
    #[arg(long, help = "Print the report as JSON")]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut SmokeConfig) {
        if let Some(v) = &self.input {
            config.input_path = v.clone();
        }
        if let Some(v) = &self.app_name {
            config.app_name = v.clone();
        }
        if let Some(v) = &self.master {
            config.master = v.clone();
        }
        if !self.needles.is_empty() {
            config.needles = self.needles.clone();
        }
        if let Some(v) = &self.line_sep {
            config.line_sep = Some(v.clone());
        }
        if self.wholetext {
            config.wholetext = true;
        }
    }
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mut config = SmokeConfig::from_env();
    cli.apply(&mut config);

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            error!(input = %config.input_path, "smoke run failed: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{report}");
    }
    ExitCode::SUCCESS
}
