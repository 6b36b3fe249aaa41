// src/output/mod.rs
// =============================================================================
// Producing and storing the result document.
//
// - xml: turns an association into the urlData XML document
// - sink: writes the document to a file (or stdout)
// =============================================================================

mod sink;
mod xml;

pub use sink::{FileSink, Sink, STDOUT_PATH};
pub use xml::serialize;
