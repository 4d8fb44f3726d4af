//! Blocking collaborators for `scrub-core`.
//!
//! Everything network-bound or byte-level lives here, outside the pure text
//! pipeline: the HTTP-backed [`UrlProbe`](scrub_core::UrlProbe)
//! implementation and confidence-scored encoding detection. Callers that
//! need to probe many URLs should parallelize these calls themselves; no
//! concurrency or cancellation logic lives in this crate.

pub mod encoding;
pub mod probe;

pub use encoding::{detect_encoding, is_valid_text};
pub use probe::HttpUrlProbe;
