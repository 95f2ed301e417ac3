//! Kindle clippings distiller
//!
//! Turns the flat `My Clippings.txt` export a Kindle keeps on its mass
//! storage partition into one markdown digest per book: highlights are
//! grouped by title, sorted by in-book position, and partial highlights
//! left behind by selection edits are collapsed into their final version.
//!
//! Parsing ([`clippings`]) and digest generation ([`digest`]) are pure;
//! all filesystem access lives in [`device`] and the binary.

pub mod clippings;
pub mod config;
pub mod device;
pub mod digest;
