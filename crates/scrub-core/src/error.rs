//! Error types for scrub.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("unknown response category: {0}")]
    UnknownCategory(String),
}
