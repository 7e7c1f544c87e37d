use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failure opening feed archive {0}: {1}")]
    ArchiveOpenError(String, String),
    #[error("failure extracting feed archive {0}: {1}")]
    ArchiveExtractError(String, String),
    #[error("missing feed file {0}")]
    MissingFeedFile(String),
    #[error("failure reading feed rows from {0}: {1}")]
    FeedReadError(String, csv::Error),
    #[error("failure reading accumulated table {0}: {1}")]
    TableReadError(String, String),
    #[error("failure writing to accumulated table {0}: {1}")]
    TableWriteError(String, csv::Error),
    #[error("failure creating {0}: {1}")]
    TableCreateError(String, std::io::Error),
    #[error("failure finalizing table {0}: {1}")]
    TableFlushError(String, std::io::Error),
    #[error("failure preparing data directory {0}: {1}")]
    DataDirError(String, std::io::Error),
}
