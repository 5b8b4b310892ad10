//! Error taxonomy for reading and parsing an activity log.

/// Everything that can go wrong while turning an `.xcactivitylog` file
/// into a profile. All variants are fatal: no partial profile is returned.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("cannot read activity log")]
    Io(#[from] std::io::Error),

    #[error("activity log is not valid gzip data")]
    Decompression(#[source] std::io::Error),

    #[error("decompressed activity log is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("invalid duration pattern")]
    Pattern(#[from] regex::Error),

    /// A line carries the duration prefix but cannot be split into a
    /// duration and a description (no tab separator, or unparseable number).
    #[error("malformed timing record at line {line_no}: {line:?}")]
    MalformedRecord { line_no: usize, line: String },
}
