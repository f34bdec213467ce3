mod comment;
mod config;
mod declaration;
mod document;
mod error;
mod extractor;
mod files;
mod linker;
mod patterns;
mod render;
mod signature;
mod timestamp;
mod types;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory as _, Parser};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::render::RenderContext;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "SWIFTDOC_LOG";

#[derive(Parser)]
#[command(
    name = "swiftdoc",
    version,
    about = "Generate cross-linked markdown documentation from a Swift source file"
)]
struct Cli {
    /// Swift source file containing one class-like declaration.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let Some(input) = cli.file else {
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    match generate(&input) {
        Ok(out_path) => {
            println!("Documentation generated successfully: {}", out_path.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Read `input`, build its document model, render it, and write the result.
/// Returns the path that was written.
///
/// # Errors
///
/// Returns config, read, no-declaration, or write errors. Nothing is written
/// unless every earlier stage succeeded.
fn generate(input: &Path) -> Result<PathBuf, error::Error> {
    let config = Config::load(Path::new("."))?;
    let source = files::read_source(input)?;
    let doc = document::build(input, &source)?;

    tracing::debug!(
        declaration = %doc.declaration.name,
        keyword = doc.declaration.kind.keyword(),
        properties = doc.properties.len(),
        operations = doc.operations.len(),
        "built document"
    );
    for link_id in doc.link_id_collisions() {
        tracing::warn!(%link_id, "several members share this anchor; mentions link to the first");
    }

    let file_name = input
        .file_name()
        .map(|n| return n.to_string_lossy())
        .unwrap_or_default();
    let generated_at = timestamp::now();
    let markdown = render::render_markdown(
        &doc,
        &RenderContext {
            fence_language: &config.fence_language,
            file_name: &file_name,
            generated_at: &generated_at,
        },
    );

    let out_path = config.output_dir.join(files::output_file_name(input));
    files::write_document(&out_path, &markdown)?;

    return Ok(out_path);
}

/// Send `tracing` events to stderr, filtered by `SWIFTDOC_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| return EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
