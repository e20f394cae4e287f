use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::csv::Record;

/// `[[name]]`; names never contain brackets so `[[[[a]]` still finds `[[a]]`.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\[\]]*)\]\]").expect("token pattern is valid"));

/// Substitute every `[[column]]` token in `template` with the record's value.
///
/// The template is scanned once, left to right, so values are inserted
/// verbatim and never expanded again. Tokens naming an unknown column are
/// left as they are.
pub fn render<'t>(template: &'t str, record: &Record) -> Cow<'t, str> {
    TOKEN_RE.replace_all(template, |caps: &Captures<'_>| match record.get(&caps[1]) {
        Some(value) => value.to_string(),
        None => caps[0].to_string(),
    })
}
