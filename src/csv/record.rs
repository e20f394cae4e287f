use std::{collections::HashMap, sync::Arc};

use crate::error::{MergeError, Result};

/// Column names from the first line of the CSV source, in file order.
#[derive(Debug, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    /// Build a header, rejecting an empty column list and repeated names.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(MergeError::EmptyInput);
        }
        let mut index = HashMap::with_capacity(names.len());
        for (pos, name) in names.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(MergeError::DuplicateHeader { name: name.clone() });
            }
        }
        Ok(Self { names, index })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

/// One data row. Values are stored in header order and looked up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    header: Arc<Header>,
    values: Vec<String>,
}

impl Record {
    /// Callers guarantee `values.len() == header.len()`.
    pub(crate) fn new(header: Arc<Header>, values: Vec<String>) -> Self {
        debug_assert_eq!(header.len(), values.len());
        Self { header, values }
    }

    /// Build a record from `(column, value)` pairs. Handy for callers that
    /// don't come from a CSV file.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let (names, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        let header = Arc::new(Header::new(names)?);
        Ok(Self::new(header, values))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.header
            .position(name)
            .map(|pos| self.values[pos].as_str())
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .names
            .iter()
            .zip(&self.values)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Every record parsed from one CSV source, in input order.
#[derive(Debug)]
pub struct Dataset {
    pub header: Arc<Header>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_header_rejected() {
        let err = Header::new(vec!["a".into(), "b".into(), "a".into()]).unwrap_err();
        assert!(matches!(err, MergeError::DuplicateHeader { ref name } if name == "a"));
    }

    #[test]
    fn test_empty_header_rejected() {
        assert!(matches!(Header::new(Vec::new()), Err(MergeError::EmptyInput)));
        let err = Record::from_pairs(Vec::<(String, String)>::new()).unwrap_err();
        assert!(matches!(err, MergeError::EmptyInput));
    }

    #[test]
    fn test_record_lookup_by_name() {
        let rec = Record::from_pairs([("first_name", "Ann"), ("last_name", "Lee")]).unwrap();
        assert_eq!(rec.get("last_name"), Some("Lee"));
        assert_eq!(rec.get("first_name"), Some("Ann"));
        assert_eq!(rec.get("email"), None);
        assert_eq!(
            rec.iter().collect::<Vec<_>>(),
            vec![("first_name", "Ann"), ("last_name", "Lee")]
        );
    }
}
