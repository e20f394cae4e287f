pub mod config;
pub mod csv;
pub mod error;
pub mod files;
pub mod merge;

pub use csv::{parse, parse_line, Dataset, Header, ParseOptions, Record};
pub use error::{MergeError, Result};
pub use merge::{generate_messages, render, GenerateOptions, GenerationReport, Templates};

use config::Config;
use tracing::info;

/// Read the CSV file and templates named by `cfg`, then write every message.
///
/// The whole CSV is parsed before the first output is written, so a
/// malformed row leaves the output directory untouched.
pub fn run(cfg: &Config) -> Result<GenerationReport> {
    let dataset = csv::parse(&files::read_text(&cfg.csv_file)?, cfg.parse)?;
    info!(rows = dataset.len(), csv = %cfg.csv_file.display(), "loaded CSV");

    let templates = Templates {
        email: cfg.email_template.as_ref().map(files::read_text).transpose()?,
        letter: cfg.letter_template.as_ref().map(files::read_text).transpose()?,
    };
    if templates.is_empty() {
        info!("neither --email nor --letter given; nothing to generate");
    }

    files::ensure_dir(&cfg.output_dir, cfg.create_output_dir)?;
    merge::generate_messages(&dataset, &templates, &cfg.output_dir, &cfg.generate)
}
