use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {}", .0.display(), .1)]
    ConfigOpen(PathBuf, #[source] std::io::Error),

    #[error("missing mandatory parameter '{}' in the configuration file {:?}", .1, .0)]
    MissingParameter(PathBuf, &'static str),

    #[error("title missing (use -t <title>)")]
    TitleMissing,

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The push service answered, but not with a 2xx status.
    #[error("push service rejected the notification (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}
