use clap::Parser;
use gcode_scan::{GcodeResult, Line, ParserConfig};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Scan G-code lines into command words", long_about = None)]
struct Cli {
    /// Input file, stdin when omitted
    file: Option<PathBuf>,

    /// Path to a JSON parser config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Report bad lines and continue instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn write_line(out: &mut impl Write, line: &Line, format: OutputFormat) -> GcodeResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", line)?,
        OutputFormat::Json => {
            let json = serde_json::to_string(line)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

/// Returns the number of lines that failed to scan.
fn run(cli: &Cli) -> GcodeResult<usize> {
    let config = match &cli.config {
        Some(path) => ParserConfig::from_file(path)?,
        None => ParserConfig::default(),
    };
    debug!("config: {:?}", config);

    let reader: Box<dyn BufRead> = match &cli.file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0;
    let mut parser = gcode_scan::Parser::with_config(reader, config);

    loop {
        match parser.next_line() {
            Ok(Some(line)) => write_line(&mut out, &line, cli.format)?,
            Ok(None) => break,
            Err(e) if e.is_recoverable() && cli.keep_going => {
                eprintln!("Error: {}", e);
                failures += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(lines = parser.line_number(), failures, "scan finished");
    Ok(failures)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
