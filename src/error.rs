// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Anything that stops the listings from loading.
/// The GUI shows the message as-is and renders nothing else.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("store not found at {}", .0.display())]
    MissingStore(PathBuf),

    #[error("could not open store {}: {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: diesel::ConnectionError,
    },

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("malformed row (post_date {post_date:?}): {reason}")]
    MalformedRow { post_date: String, reason: String },
}
