//! Per-book digest generation
//!
//! Takes one book's clippings, sorts them by in-book position, drops
//! partial highlights that a neighbouring highlight fully contains, and
//! renders the survivors into a `<encoded-title>-TLDR.md` bullet list.
//!
//! Partial highlights are an artifact of selection editing on-device: the
//! firmware records the intermediate selection and the final, longer one
//! as separate entries at (nearly) the same position. After the position
//! sort those land next to each other, so a substring check against the
//! two neighbours is enough to collapse them.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::clippings::Clipping;

/// Digest writing errors
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("failed to write digest: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode a book title into a filesystem-safe file stem
///
/// Spaces become underscores; the punctuation Kindle titles commonly
/// carry (parentheses around authors, commas, colons, quotes) is dropped.
pub fn encode_title(title: &str) -> String {
    title
        .chars()
        .filter_map(|ch| match ch {
            ' ' => Some('_'),
            '(' | ')' | ',' | ':' | '"' => None,
            other => Some(other),
        })
        .collect()
}

/// Path of the digest document for `title` under `output_root`
pub fn digest_path(output_root: &Path, title: &str) -> PathBuf {
    output_root.join(format!("{}-TLDR.md", encode_title(title)))
}

/// Select the highlights worth keeping from a position-sorted slice
///
/// A highlight is dropped when its content is a substring of the next
/// highlight (a longer corrected version follows) or of the previous one
/// (already covered). The last highlight has no successor to supersede it
/// and is always kept.
fn select_highlights(sorted: &[Clipping]) -> Vec<&Clipping> {
    let mut kept = Vec::with_capacity(sorted.len());

    for (i, clip) in sorted.iter().enumerate() {
        if i + 1 == sorted.len() {
            kept.push(clip);
            break;
        }

        if sorted[i + 1].content.contains(&clip.content) {
            continue;
        }

        if i > 0 && sorted[i - 1].content.contains(&clip.content) {
            continue;
        }

        kept.push(clip);
    }

    kept
}

/// Render one book's digest document
///
/// Sorts the clippings in place (stable, by numeric span start, so ties
/// keep their encounter order) and returns the full document text.
pub fn render_digest(title: &str, clippings: &mut [Clipping]) -> String {
    clippings.sort_by_key(|clip| clip.location.start);

    let mut doc = format!("# TLDR for {}\n", title);
    for clip in select_highlights(clippings) {
        doc.push_str("- ");
        doc.push_str(&clip.flattened_content());
        doc.push('\n');
    }

    doc
}

/// Write the digest document for one book under `output_root`
///
/// Any previous digest for the title is replaced wholesale, so reruns
/// over the same export stay idempotent.
pub fn write_digest(
    title: &str,
    clippings: &mut [Clipping],
    output_root: &Path,
) -> Result<PathBuf, DigestError> {
    let doc = render_digest(title, clippings);
    let path = digest_path(output_root, title);
    fs::write(&path, doc)?;
    Ok(path)
}
