//! pdfscan CLI - tolerant PDF text extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pdfscan::render::{to_json, to_text};
use pdfscan::{
    detect_format_from_bytes, extract_text_from_base64_pdf_with_options,
    extract_text_from_file_with_options, sniff_header, ErrorMode, ExtractOptions,
    ExtractionResult, ExtractionStats, JsonFormat, ObjectTable, StripMode, TextOptions,
};

#[derive(Parser)]
#[command(name = "pdfscan")]
#[command(version)]
#[command(about = "Extract text from PDFs, including malformed ones", long_about = None)]
struct Cli {
    /// Fail on files without a recognizable PDF header
    #[arg(long, global = true)]
    strict: bool,

    /// Operator stripping mode for stream bodies
    #[arg(long, global = true, value_enum, default_value = "loose", env = "PDFSCAN_STRIP")]
    strip: StripLevel,

    /// Skip the sweep of bare (...) and <...> runs
    #[arg(long, global = true)]
    no_sweep: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract plain text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefix each page with a page header
        #[arg(long)]
        page_headers: bool,

        /// Leave out pages without text
        #[arg(long)]
        skip_empty: bool,
    },

    /// Extract text and pages as JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract from a file holding a base64 payload or data URL
    Base64 {
        /// File containing the payload
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show header, object and page information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StripLevel {
    /// Remove operator text wherever it occurs
    Loose,
    /// Remove only standalone operators
    Bounded,
}

impl From<StripLevel> for StripMode {
    fn from(level: StripLevel) -> Self {
        match level {
            StripLevel::Loose => StripMode::Loose,
            StripLevel::Bounded => StripMode::Bounded,
        }
    }
}

impl Cli {
    fn extract_options(&self) -> ExtractOptions {
        let mode = if self.strict {
            ErrorMode::Strict
        } else {
            ErrorMode::Lenient
        };

        ExtractOptions::new()
            .with_error_mode(mode)
            .with_strip_mode(self.strip.into())
            .with_bracket_sweep(!self.no_sweep)
            .sequential()
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.extract_options();

    let result = match cli.command {
        Commands::Text {
            input,
            output,
            page_headers,
            skip_empty,
        } => cmd_text(&input, output.as_deref(), page_headers, skip_empty, options),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact, options),
        Commands::Base64 { input, compact } => cmd_base64(&input, compact, options),
        Commands::Info { input } => cmd_info(&input, options),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    page_headers: bool,
    skip_empty: bool,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = extract_text_from_file_with_options(input, options)?;

    let text_options = TextOptions::new()
        .with_page_headers(page_headers)
        .with_skip_empty_pages(skip_empty);
    let text = to_text(&result, &text_options)?;

    write_output(&text, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = extract_text_from_file_with_options(input, options)?;
    let json = to_json(&result, json_format(compact))?;
    write_output(&json, output)
}

fn cmd_base64(
    input: &Path,
    compact: bool,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = fs::read_to_string(input)?;
    log::debug!("Read {} bytes of base64 payload", payload.len());

    let result = extract_text_from_base64_pdf_with_options(payload.trim(), options);
    let json = to_json(&result, json_format(compact))?;
    write_output(&json, None)
}

fn cmd_info(input: &Path, options: ExtractOptions) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let result: ExtractionResult = pdfscan::extract_text_from_pdf_with_options(&data, options);
    let table = ObjectTable::from_bytes(&data);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {:?}", "Header".bold(), sniff_header(&data));
    match detect_format_from_bytes(&data) {
        Ok(format) => println!("{}: {}", "Format".bold(), format),
        Err(_) => println!("{}: {}", "Format".bold(), "unknown".yellow()),
    }
    println!(
        "{}: {}",
        "Xref table".bold(),
        if table.has_xref() { "Yes" } else { "No" }
    );
    println!("{}: {}", "Objects".bold(), table.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if !result.success {
        let message = result.error.as_deref().unwrap_or("unknown error");
        println!("{}: {}", "Extraction".bold(), message.red());
        return Ok(());
    }

    let stats = ExtractionStats::from_result(&result);
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Empty pages".bold(), stats.empty_page_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}
