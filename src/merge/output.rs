use clap::ValueEnum;

use crate::csv::Record;
use crate::error::{MergeError, Result};

/// The two kinds of message a run can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Email,
    Letter,
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Email => "email",
            MessageKind::Letter => "letter",
        }
    }

    pub fn suffix(&self) -> String {
        format!("_{}.txt", self.as_str())
    }
}

/// What to do when an output file name is produced twice, or already exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicy {
    /// Replace silently; the later row wins.
    #[default]
    Overwrite,
    /// Abort before anything is written.
    Fail,
}

/// Columns whose values, joined with `_`, prefix every output file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingScheme {
    fields: Vec<String>,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            fields: vec!["first_name".into(), "last_name".into()],
        }
    }
}

impl NamingScheme {
    /// `None` if `fields` is empty.
    pub fn new<I, S>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        (!fields.is_empty()).then_some(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Output file name for `record` (the `row`-th, 1-based) and `kind`.
    pub fn file_name(&self, record: &Record, row: usize, kind: MessageKind) -> Result<String> {
        let mut parts = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = record.get(field).ok_or_else(|| MergeError::MissingField {
                field: field.clone(),
                row,
            })?;
            parts.push(value);
        }

        let name = format!("{}{}", parts.join("_"), kind.suffix());
        if !is_plain_file_name(&name) {
            return Err(MergeError::InvalidFileName { name, row });
        }
        Ok(name)
    }
}

/// The suffix keeps the name non-empty and never `.` or `..`; only a
/// separator could point outside the output directory.
fn is_plain_file_name(name: &str) -> bool {
    !name.contains(|c| matches!(c, '/' | '\\' | '\0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_naming() {
        let rec = Record::from_pairs([("first_name", "Ann"), ("last_name", "Lee")]).unwrap();
        let scheme = NamingScheme::default();
        assert_eq!(
            scheme.file_name(&rec, 1, MessageKind::Email).unwrap(),
            "Ann_Lee_email.txt"
        );
        assert_eq!(
            scheme.file_name(&rec, 1, MessageKind::Letter).unwrap(),
            "Ann_Lee_letter.txt"
        );
    }

    #[test]
    fn test_custom_naming_fields() {
        let rec = Record::from_pairs([("id", "42"), ("email", "a@b.c")]).unwrap();
        let scheme = NamingScheme::new(["id"]).unwrap();
        assert_eq!(
            scheme.file_name(&rec, 1, MessageKind::Email).unwrap(),
            "42_email.txt"
        );
        assert!(NamingScheme::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_missing_naming_field() {
        let rec = Record::from_pairs([("first_name", "Ann")]).unwrap();
        let err = NamingScheme::default()
            .file_name(&rec, 7, MessageKind::Letter)
            .unwrap_err();
        assert!(matches!(
            err,
            MergeError::MissingField { ref field, row: 7 } if field == "last_name"
        ));
    }

    #[test]
    fn test_path_separator_rejected() {
        let rec = Record::from_pairs([("first_name", "../etc"), ("last_name", "x")]).unwrap();
        let err = NamingScheme::default()
            .file_name(&rec, 1, MessageKind::Email)
            .unwrap_err();
        assert!(matches!(err, MergeError::InvalidFileName { .. }));
    }

    #[test]
    fn test_dot_values_stay_inside_dir() {
        let rec = Record::from_pairs([("first_name", ".."), ("last_name", ".")]).unwrap();
        let name = NamingScheme::default()
            .file_name(&rec, 1, MessageKind::Email)
            .unwrap();
        assert_eq!(name, ".._._email.txt");
        assert!(is_plain_file_name(&name));
        assert!(!is_plain_file_name("a\\b_email.txt"));
    }

    #[test]
    fn test_empty_values_still_named() {
        let rec = Record::from_pairs([("first_name", ""), ("last_name", "")]).unwrap();
        assert_eq!(
            NamingScheme::default()
                .file_name(&rec, 1, MessageKind::Email)
                .unwrap(),
            "__email.txt"
        );
    }
}
