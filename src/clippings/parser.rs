//! Clippings entry parser
//!
//! Parses delimiter-separated export chunks into [`Clipping`] records.
//!
//! Grammar (one chunk):
//! ```text
//! entry    = title "\n" blank* metadata "\n" content
//! metadata = "- Your Highlight " position " | Added on " date
//! position = "on page" number sep span
//!          | ("on" | "at") sep span
//! span     = ("page" | "location") " " number "-" number
//! sep      = spaces ["|"] spaces   ; at least one character
//! ```
//!
//! The leading page-number clause some firmware versions emit is validated
//! and discarded; the span that follows it is the authoritative position.

use std::collections::HashMap;

use thiserror::Error;

use super::types::{Clipping, Location, LocationKind};

/// Clippings parsing errors
///
/// A failed parse marks a chunk as malformed noise (boilerplate, notes,
/// bookmarks); callers drop the chunk rather than propagate these.
#[derive(Debug, Error)]
pub enum ClippingParseError {
    #[error("entry ends before the metadata line")]
    TruncatedEntry,

    #[error("metadata line is not a highlight")]
    NotAHighlight,

    #[error("expected 'on' or 'at' at position {0}")]
    ExpectedConnective(usize),

    #[error("expected separator at position {0}")]
    ExpectedSeparator(usize),

    #[error("expected 'page' or 'location' at position {0}")]
    ExpectedSpanUnit(usize),

    #[error("expected number at position {0}")]
    ExpectedNumber(usize),

    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("missing 'Added on' timestamp")]
    MissingTimestamp,
}

/// Parser state over a single metadata line
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ClippingParseError> {
        if self.skip_if(expected) {
            Ok(())
        } else {
            Err(ClippingParseError::UnexpectedChar(
                self.peek().unwrap_or('\0'),
                self.pos,
            ))
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    fn skip_str(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.advance();
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Parse a sequence of digits as u32
    fn parse_number(&mut self) -> Result<u32, ClippingParseError> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(ClippingParseError::ExpectedNumber(start));
        }

        self.input[start..self.pos]
            .parse()
            .map_err(|_| ClippingParseError::ExpectedNumber(start))
    }

    /// Clause separator between the connective and the span: optional
    /// spaces around an optional pipe, at least one character consumed
    fn skip_separator(&mut self) -> bool {
        let start = self.pos;
        self.skip_spaces();
        self.skip_if('|');
        self.skip_spaces();
        self.pos > start
    }

    /// Consume a leading "on page <n>" clause when a separate span clause
    /// follows it ("on page 12 | location 100-105"). Leaves the position
    /// untouched when "page" is itself the span unit ("on page 100-105").
    fn try_page_prefix(&mut self) -> bool {
        let start = self.pos;
        if self.skip_str("on page ") && self.parse_number().is_ok() {
            let after_number = self.pos;
            if self.skip_separator()
                && (self.starts_with("page ") || self.starts_with("location "))
            {
                self.pos = after_number;
                return true;
            }
        }
        self.pos = start;
        false
    }
}

/// Parse the "- Your Highlight ..." metadata line
fn parse_metadata_line(line: &str) -> Result<(Location, String), ClippingParseError> {
    let mut p = Parser::new(line);

    if !p.skip_str("- Your Highlight ") {
        return Err(ClippingParseError::NotAHighlight);
    }

    if !p.try_page_prefix() && !p.skip_str("on") && !p.skip_str("at") {
        return Err(ClippingParseError::ExpectedConnective(p.pos));
    }

    if !p.skip_separator() {
        return Err(ClippingParseError::ExpectedSeparator(p.pos));
    }

    let kind = if p.skip_str("page ") {
        LocationKind::Page
    } else if p.skip_str("location ") {
        LocationKind::Location
    } else {
        return Err(ClippingParseError::ExpectedSpanUnit(p.pos));
    };

    let start = p.parse_number()?;
    p.expect('-')?;
    let end = p.parse_number()?;

    if !p.skip_str(" | Added on ") {
        return Err(ClippingParseError::MissingTimestamp);
    }

    let added_on = p.rest().trim().to_string();
    if added_on.is_empty() {
        return Err(ClippingParseError::MissingTimestamp);
    }

    Ok((Location { kind, start, end }, added_on))
}

/// Parse one delimiter-separated chunk into a [`Clipping`]
pub fn parse_entry(chunk: &str) -> Result<Clipping, ClippingParseError> {
    let (title_line, mut rest) = chunk
        .split_once('\n')
        .ok_or(ClippingParseError::TruncatedEntry)?;

    // Blank lines between the title and the metadata line are tolerated
    let (metadata_line, content) = loop {
        match rest.split_once('\n') {
            Some((line, tail)) if line.trim().is_empty() => rest = tail,
            Some((line, tail)) => break (line, tail),
            None => break (rest, ""),
        }
    };

    let (location, added_on) = parse_metadata_line(metadata_line)?;

    Ok(Clipping {
        title: title_line.trim().to_string(),
        location,
        added_on,
        content: content.trim().to_string(),
    })
}

/// Parse a whole export into per-title groups of clippings
///
/// Chunks that fail the grammar are dropped; the delimiter also shows up
/// in the file's own boilerplate, so mismatches are expected. Group
/// vectors preserve the order chunks were encountered in.
pub fn parse_export(raw: &str, delimiter: &str) -> HashMap<String, Vec<Clipping>> {
    // Exports written on-device use CRLF line endings
    let raw = raw.replace("\r\n", "\n");

    let mut groups: HashMap<String, Vec<Clipping>> = HashMap::new();
    for chunk in raw.split(delimiter) {
        match parse_entry(chunk) {
            Ok(clipping) => {
                groups
                    .entry(clipping.title.clone())
                    .or_default()
                    .push(clipping);
            }
            Err(e) => {
                tracing::trace!("skipping malformed chunk: {}", e);
            }
        }
    }

    groups
}
