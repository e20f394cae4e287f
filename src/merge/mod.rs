// src/merge/mod.rs
pub mod output;
pub mod render;

pub use output::{CollisionPolicy, MessageKind, NamingScheme};
pub use render::render;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::csv::Dataset;
use crate::error::{MergeError, Result};
use crate::files;

/// Template texts for each enabled message kind.
#[derive(Clone, Debug, Default)]
pub struct Templates {
    pub email: Option<String>,
    pub letter: Option<String>,
}

impl Templates {
    /// Enabled templates, email first.
    pub fn enabled(&self) -> impl Iterator<Item = (MessageKind, &str)> {
        [
            (MessageKind::Email, self.email.as_deref()),
            (MessageKind::Letter, self.letter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, tpl)| tpl.map(|t| (kind, t)))
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.letter.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    pub naming: NamingScheme,
    pub collisions: CollisionPolicy,
}

/// One rendered message, ready to be written.
#[derive(Debug, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub emails: usize,
    pub letters: usize,
    /// Paths in write order.
    pub written: Vec<PathBuf>,
}

/// Render every (record × enabled template) pair in dataset order.
///
/// Nothing touches the filesystem; naming errors surface here so a failing
/// run writes no files at all.
pub fn plan_messages(
    dataset: &Dataset,
    templates: &Templates,
    naming: &NamingScheme,
) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    for (i, record) in dataset.iter().enumerate() {
        let row = i + 1;
        for (kind, template) in templates.enabled() {
            let file_name = naming.file_name(record, row, kind)?;
            let content = render(template, record).into_owned();
            messages.push(Message {
                kind,
                file_name,
                content,
            });
        }
    }
    Ok(messages)
}

/// Write one file per (record × enabled template) into `output_dir`.
#[instrument(level = "info", skip(dataset, templates, output_dir, opts), fields(out = %output_dir.as_ref().display(), rows = dataset.len()))]
pub fn generate_messages(
    dataset: &Dataset,
    templates: &Templates,
    output_dir: impl AsRef<Path>,
    opts: &GenerateOptions,
) -> Result<GenerationReport> {
    let output_dir = output_dir.as_ref();
    let messages = plan_messages(dataset, templates, &opts.naming)?;

    if opts.collisions == CollisionPolicy::Fail {
        check_collisions(&messages, output_dir)?;
    }

    let mut report = GenerationReport::default();
    for msg in &messages {
        let path = files::write_text(output_dir, &msg.file_name, &msg.content)?;
        match msg.kind {
            MessageKind::Email => report.emails += 1,
            MessageKind::Letter => report.letters += 1,
        }
        report.written.push(path);
    }

    info!(
        emails = report.emails,
        letters = report.letters,
        "generated messages"
    );
    Ok(report)
}

fn check_collisions(messages: &[Message], output_dir: &Path) -> Result<()> {
    let mut seen = HashSet::with_capacity(messages.len());
    for msg in messages {
        let path = output_dir.join(&msg.file_name);
        if !seen.insert(msg.file_name.as_str()) || path.exists() {
            debug!(path = %path.display(), "collision");
            return Err(MergeError::OutputCollision { path });
        }
    }
    Ok(())
}
