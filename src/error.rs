pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("source map syntax error: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    #[error("got version={0}, but only version 3 is supported")]
    UnsupportedVersion(i64),
    #[error("a mapping is malformed: \"{0}\"")]
    MalformedMappings(String),
    #[error("a mapping references unknown source #{0}")]
    UnknownSourceReference(i64),
    #[error("a mapping references unknown name #{0}")]
    UnknownNameReference(i64),
    #[error("source root is not a valid url: \"{0}\"")]
    InvalidRoot(String),
    #[error("origin locator is not a valid url: \"{0}\"")]
    InvalidOrigin(String),
}
