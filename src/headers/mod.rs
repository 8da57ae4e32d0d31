use crate::errors::Error as HttpError;
use crate::grammar::{is_field_value, is_token};

mod header_arg;
pub use header_arg::*;

pub const CONTENT_LENGTH_HEADER_NAME: &str = "content-length";
pub const CONTENT_TYPE_HEADER_NAME: &str = "content-type";
pub const LOCATION_HEADER_NAME: &str = "location";

/// Outgoing headers of a response.
///
/// Names compare case-insensitively but keep the casing they were last set
/// with. Entries keep insertion order; replacing a header keeps its slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Headers {
            entries: Vec::new(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    pub fn set(&mut self, name: String, value: String) {
        match self.position(&name) {
            Some(i) => self.entries[i] = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check a header line against the field grammar before it is stored.
    pub fn validate(name: &str, value: &str) -> Result<(), HttpError> {
        if !is_token(name.as_bytes()) {
            return Err(HttpError::InvalidHeaderName(name.to_string()));
        }

        if !is_field_value(value.as_bytes()) {
            return Err(HttpError::InvalidHeaderValue(name.to_string()));
        }

        Ok(())
    }
}
