//! Cross-note link extraction.

pub mod extractor;

pub use extractor::{LinkRef, extract_refs, extract_targets};
