// src/links/mod.rs
// =============================================================================
// Link classification and association.
//
// Submodules, in pipeline order:
// - extract: raw hrefs -> sub-URL candidates + file candidates
// - dedupe: drops repeated URLs, keeping first-seen order
// - associate: maps each sub-URL to the filenames found beneath it
//
// All of this is pure, synchronous string work. Nothing here does I/O.
// =============================================================================

mod associate;
mod dedupe;
mod extract;

pub use associate::{associate, Association, SubUrlEntry};
pub use dedupe::dedupe;
pub use extract::{extract, Candidates};
