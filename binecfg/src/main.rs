//! e.cfg command-line tool for parsing and re-rendering Enlightenment config
//! dumps.
//!
//! Usage: ecfg [OPTIONS] [FILE]
//!
//! Options:
//!   -f, --format <FORMAT>  Output format (text, xml, json) [default: text]
//!                          Also accepted as --output
//!       --indent <N>       Indent width for JSON output [default: 2]
//!       --check            Check if file is valid (exit 0 if valid, 1 if invalid)
//!       --max-depth <N>    Maximum group nesting [default: 128]
//!   -v, --verbose...       Log more (repeat for more detail)
//!   -h, --help             Print help
//!   -V, --version          Print version

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use libecfg::{ECfg, ParseContext, DEFAULT_MAX_DEPTH};
use log::{debug, info};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Xml,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ecfg", version, about = "Parse e.cfg files")]
struct Cli {
    /// Input file; `-` or nothing reads standard input
    filename: Option<PathBuf>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        visible_alias = "output"
    )]
    format: OutputFormat,

    /// Indent width for JSON output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Only check that the input parses
    #[arg(long)]
    check: bool,

    /// Maximum group nesting
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input_path = cli
        .filename
        .as_deref()
        .filter(|p| *p != Path::new("-"));

    if let Some(path) = input_path {
        if !path.exists() {
            println!("Input file not found");
            process::exit(1);
        }
    }

    let text = match read_input(input_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let name = input_path.map(|p| p.to_string_lossy().to_string());
    let ctx = ParseContext::new(name.as_deref()).with_max_depth(cli.max_depth);
    let cfg = match ECfg::with_context(&text, &ctx) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!("parsed {}", cfg.root());

    if cli.check {
        info!("{} is valid", name.as_deref().unwrap_or("<stdin>"));
        return;
    }

    let output = match cli.format {
        OutputFormat::Text => cfg.text(),
        OutputFormat::Xml => cfg.xml(),
        OutputFormat::Json => cfg.json(Some(cli.indent)),
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Read the whole input, from a file or from stdin.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Install env_logger. `RUST_LOG` wins; otherwise warn, raised by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
