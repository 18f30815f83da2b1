use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmail_parser::core::{print_error_message, produce_report_with_options, ReportOptions};
use vmail_parser::env::{describe_all, logging::LogLevel, EnvVar};

const STDIN_PATH: &str = "-";

/// Report which HTML and CSS features a document uses, line by line
#[derive(Parser, Debug)]
#[command(name = "vmail-parser", version, about, after_help = env_help())]
struct Cli {
    /// HTML file to inspect ("-" or nothing reads from stdin)
    target: Option<String>,

    /// Output compact JSON instead of pretty-printing
    #[arg(short, long)]
    compact: bool,

    /// Also record the value of this CSS property (repeatable)
    #[arg(short = 'p', long = "value-property", value_name = "PROPERTY")]
    value_properties: Vec<String>,

    /// Force the document charset
    #[arg(short, long, value_name = "CHARSET")]
    encoding: Option<String>,
}

fn env_help() -> String {
    let mut help = String::from("Environment variables:\n");
    for (name, description) in describe_all() {
        help.push_str(&format!("  {name}\n      {description}\n"));
    }
    help
}

fn read_input(target: Option<&str>) -> io::Result<Vec<u8>> {
    match target {
        None | Some(STDIN_PATH) => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
        Some(path) => fs::read(path),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LogLevel::get_or_default("warn".to_string())))
        .with_writer(io::stderr)
        .init();

    let mut options = match ReportOptions::from_env() {
        Ok(options) => options,
        Err(error) => {
            print_error_message(&error.to_string());
            process::exit(1);
        }
    };
    for property in &cli.value_properties {
        options
            .value_sensitive_properties
            .insert(property.trim().to_ascii_lowercase());
    }
    if cli.encoding.is_some() {
        options.encoding = cli.encoding.clone();
    }

    let data = match read_input(cli.target.as_deref()) {
        Ok(data) => data,
        Err(error) => {
            let source = cli.target.as_deref().unwrap_or(STDIN_PATH);
            print_error_message(&format!("Could not read {source}: {error}"));
            process::exit(1);
        }
    };

    let report = match produce_report_with_options(&data, &options) {
        Ok(report) => report,
        Err(error) => {
            print_error_message(&format!("Error: {error}"));
            process::exit(1);
        }
    };

    tracing::info!(
        bytes = data.len(),
        max_line = report.max_line().unwrap_or(0),
        "document analysed"
    );

    let output = if cli.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(error) => {
            print_error_message(&format!("Could not serialize report: {error}"));
            process::exit(1);
        }
    }
}
