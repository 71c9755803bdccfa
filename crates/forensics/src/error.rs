use std::io;
use thiserror::Error;

/// Internal failures during metadata extraction.
///
/// These never escape [`extract`](crate::extract): the pipeline degrades by
/// recording a single warning instead of aborting the request.
#[derive(Debug, Error)]
pub enum ForensicsError {
    /// Filesystem access failed (stat, open, read).
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The image could not be decoded.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// Embedded tag data was present but malformed.
    #[error("tag decode failed: {0}")]
    Exif(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_message() {
        let err = ForensicsError::Decode("bad marker".into());
        assert_eq!(err.to_string(), "image decode failed: bad marker");
    }
}
