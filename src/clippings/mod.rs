//! Clippings export handling
//!
//! This module parses the annotation dump Kindle firmware appends to
//! `documents/My Clippings.txt`. Entries are separated by a fixed
//! delimiter line and follow this shape:
//!
//! ```text
//! <title line>
//! - Your Highlight <position> | Added on <date>
//! <content, one or more lines>
//! ```
//!
//! The `<position>` clause varies across firmware versions; all three
//! observed phrasings are accepted:
//!
//! ```text
//! on page 12 | location 100-105
//! at location 100-105
//! on page 100-105
//! ```
//!
//! Chunks that do not match the grammar (the file's own header and footer
//! boilerplate, notes, bookmarks) are silently discarded.

mod parser;
mod types;

pub use parser::{parse_entry, parse_export, ClippingParseError};
pub use types::{Clipping, Location, LocationKind};
