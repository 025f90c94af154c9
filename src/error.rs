use std::io;

use thiserror::Error;

/// Errors raised while setting up the server process.
///
/// Nothing on the completion path returns an error; this type only covers
/// startup concerns such as logging.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("unable to determine user cache directory")]
    NoCacheDir,

    #[error("failed to format log timestamp: {0}")]
    TimeFormat(#[from] time::error::Format),

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
