//! Command-line interface for the autospec converter.

use autospec_formal::Registry;
use autospec_jff::{convert, read_document, JffError};
use clap::{Parser, Subcommand};
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Version string enriched with the git revision by build.rs.
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("AUTOSPEC_GIT_HASH"),
    " ",
    env!("AUTOSPEC_GIT_DATE"),
    ")"
);

/// CLI error with source context for pretty printing.
#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("failed to read file: {message}")]
    Io { message: String },

    #[error("xml error: {message}")]
    #[diagnostic(code(autospec::xml_error))]
    Xml {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("invalid document: {message}")]
    #[diagnostic(code(autospec::document_error))]
    Document { message: String },

    #[error("conversion failed: {message}")]
    #[diagnostic(code(autospec::convert_error))]
    Convert { message: String },
}

impl CliError {
    fn from_jff_error(e: JffError, source: &str, filename: &str) -> Self {
        match e {
            JffError::Xml(xml) => {
                let at = byte_offset(source, xml.pos()).min(source.len());
                let len = usize::from(at < source.len());
                CliError::Xml {
                    message: xml.to_string(),
                    src: NamedSource::new(filename, source.to_string()),
                    span: (at, len).into(),
                }
            }
            JffError::Convert(convert) => CliError::Convert {
                message: convert.to_string(),
            },
            other => CliError::Document {
                message: other.to_string(),
            },
        }
    }
}

type CliResult<T> = Result<T, CliError>;

/// Byte offset of a 1-indexed row/column position, for span reporting.
fn byte_offset(source: &str, pos: roxmltree::TextPos) -> usize {
    let mut remaining = pos.row.saturating_sub(1);
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        if remaining == 0 {
            let col = pos.col.saturating_sub(1) as usize;
            let line_offset = line
                .char_indices()
                .nth(col)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return offset + line_offset;
        }
        offset += line.len();
        remaining -= 1;
    }
    source.len()
}

#[derive(Parser)]
#[command(name = "autospec", version = VERSION)]
#[command(about = "Convert JFLAP automaton files to formal tuple notation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JFLAP file to its formal definition
    Convert {
        /// Input .jff file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Show a summary of a JFLAP file
    Info {
        /// Input .jff file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Convert { file, output } => cmd_convert(&file, output.as_deref()),
        Commands::Info { file } => cmd_info(&file),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}

fn cmd_convert(file: &Path, output: Option<&Path>) -> CliResult<()> {
    let filename = file.display().to_string();
    let source = fs::read_to_string(file).map_err(|e| CliError::Io {
        message: e.to_string(),
    })?;

    info!("converting {filename}");
    let rendered =
        convert(&source).map_err(|e| CliError::from_jff_error(e, &source, &filename))?;

    if let Some(output_path) = output {
        fs::write(output_path, &rendered).map_err(|e| CliError::Io {
            message: e.to_string(),
        })?;
        println!("converted: {} -> {}", file.display(), output_path.display());
    } else {
        print!("{rendered}");
    }

    Ok(())
}

fn cmd_info(file: &Path) -> CliResult<()> {
    let filename = file.display().to_string();
    let source = fs::read_to_string(file).map_err(|e| CliError::Io {
        message: e.to_string(),
    })?;

    let doc = read_document(&source).map_err(|e| CliError::from_jff_error(e, &source, &filename))?;
    let registry = Registry::build(&doc.states).map_err(|e| CliError::Convert {
        message: e.to_string(),
    })?;

    println!("machine: {}", doc.machine_type());
    println!("  states: {}", doc.states.len());
    println!("  transitions: {}", doc.transitions.len());
    println!("  initial: {}", registry.initial_name());
    println!(
        "  final: {}",
        registry.final_names().collect::<Vec<_>>().join(",")
    );

    Ok(())
}
