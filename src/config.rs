// src/config.rs
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::warn;

use crate::csv::{BlankLinePolicy, ParseOptions, RowShapePolicy};
use crate::merge::{CollisionPolicy, GenerateOptions, NamingScheme};

pub const EXAMPLES: &str = "\
Examples:
  mailmerge --email --email-template email-template.txt --output-dir emails --csv-file customer.csv
  mailmerge --letter --letter-template letter-template.txt --output-dir letters --csv-file customer.csv";

/// Command-line args, as typed by the user.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Generate personalized emails and letters from a CSV file",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Generate email messages. Requires --email-template.
    #[arg(long)]
    pub email: bool,

    /// A filename for the email template.
    #[arg(long, value_name = "path/to/file")]
    pub email_template: Option<PathBuf>,

    /// Generate letters. Requires --letter-template.
    #[arg(long)]
    pub letter: bool,

    /// A filename for the letter template.
    #[arg(long, value_name = "path/to/file")]
    pub letter_template: Option<PathBuf>,

    /// The folder to store all generated files.
    #[arg(long, value_name = "path/to/folder")]
    pub output_dir: PathBuf,

    /// The CSV file to process.
    #[arg(long, value_name = "path/to/file")]
    pub csv_file: PathBuf,

    /// Columns joined with `_` to name each output file.
    #[arg(long, value_delimiter = ',', default_value = "first_name,last_name")]
    pub name_fields: Vec<String>,

    /// How to treat rows whose field count differs from the header.
    #[arg(long, value_enum, default_value_t = RowShapePolicy::Strict)]
    pub row_shape: RowShapePolicy,

    /// How to treat blank lines in the CSV body.
    #[arg(long, value_enum, default_value_t = BlankLinePolicy::Skip)]
    pub blank_lines: BlankLinePolicy,

    /// Fail instead of overwriting when an output file already exists.
    #[arg(long)]
    pub no_clobber: bool,

    /// Create the output folder if it does not exist.
    #[arg(long)]
    pub create_output_dir: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--email provided but no --email-template was given")]
    EmailTemplateMissing,

    #[error("--letter provided but no --letter-template was given")]
    LetterTemplateMissing,

    #[error("--name-fields needs at least one column")]
    EmptyNameFields,
}

/// Validated run configuration. A template path is present only when its
/// message kind is enabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub csv_file: PathBuf,
    pub output_dir: PathBuf,
    pub email_template: Option<PathBuf>,
    pub letter_template: Option<PathBuf>,
    pub create_output_dir: bool,
    pub parse: ParseOptions,
    pub generate: GenerateOptions,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let email_template = enabled_template(
            "email",
            args.email,
            args.email_template,
            ConfigError::EmailTemplateMissing,
        )?;
        let letter_template = enabled_template(
            "letter",
            args.letter,
            args.letter_template,
            ConfigError::LetterTemplateMissing,
        )?;

        let naming = NamingScheme::new(
            args.name_fields
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        )
        .ok_or(ConfigError::EmptyNameFields)?;

        Ok(Config {
            csv_file: args.csv_file,
            output_dir: args.output_dir,
            email_template,
            letter_template,
            create_output_dir: args.create_output_dir,
            parse: ParseOptions {
                row_shape: args.row_shape,
                blank_lines: args.blank_lines,
            },
            generate: GenerateOptions {
                naming,
                collisions: if args.no_clobber {
                    CollisionPolicy::Fail
                } else {
                    CollisionPolicy::Overwrite
                },
            },
        })
    }
}

/// Template path for an enabled kind; `None` when the kind is off.
fn enabled_template(
    kind: &str,
    enabled: bool,
    path: Option<PathBuf>,
    missing: ConfigError,
) -> Result<Option<PathBuf>, ConfigError> {
    match (enabled, path) {
        (true, Some(p)) => Ok(Some(p)),
        (true, None) => Err(missing),
        (false, Some(p)) => {
            warn!(template = %p.display(), "--{kind}-template given without --{kind}; ignoring");
            Ok(None)
        }
        (false, None) => Ok(None),
    }
}
