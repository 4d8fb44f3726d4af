//! Best-effort cleanup of raw LLM response text.
//!
//! Everything here is pure and synchronous: given a category label and the
//! text a model produced, the pipeline rewrites boilerplate away, repairs
//! near-JSON, fixes mispicked acronyms, trims trailing meta-commentary and
//! splits exposed reasoning from the final answer. Absent input propagates
//! as absence through every stage; nothing in this crate performs I/O.
//!
//! The one seam that touches the network (URL validation) is a trait,
//! [`UrlProbe`], implemented by the `scrub-net` crate.

pub mod category;
pub mod cleanup;
pub mod engine;
pub mod error;
pub mod json_repair;
pub mod policy;
pub mod reasoning;
pub mod rules;
pub mod tla;
pub mod trim;
pub mod urls;

pub use category::Category;
pub use cleanup::{cleanup, CleanupOutcome};
pub use engine::apply_swaps;
pub use error::ScrubError;
pub use json_repair::{fix_missing_colons, repair_json};
pub use policy::{check_rejection, Rejection};
pub use reasoning::{is_well_formed_reasoning, split_reasoning};
pub use tla::tla_fixer;
pub use trim::trim_sections;
pub use urls::{url_fixer, UrlProbe};
