//! Highlight record types
//!
//! One `Clipping` per successfully parsed export entry. The `added_on`
//! timestamp is carried verbatim; nothing downstream interprets it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single highlight extracted from the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipping {
    /// Book title, trimmed of surrounding whitespace (the grouping key)
    pub title: String,
    /// Position of the highlight within the book
    pub location: Location,
    /// The "Added on ..." timestamp, kept as-is
    pub added_on: String,
    /// Highlighted text; may contain internal newlines
    pub content: String,
}

/// The span a highlight covers, in the device's addressing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub kind: LocationKind,
    pub start: u32,
    pub end: u32,
}

/// Which positional unit the export used for a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Page,
    Location,
}

impl Clipping {
    /// Content with internal newlines flattened to spaces, ready for a
    /// single-line bullet
    pub fn flattened_content(&self) -> String {
        self.content.replace('\n', " ")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.kind, self.start, self.end)
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Page => write!(f, "page"),
            LocationKind::Location => write!(f, "location"),
        }
    }
}
