use crate::feed::FeedError;
use thiserror::Error;
use transitnet_core::model::NetworkError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure ingesting feeds: {source}")]
    FeedError {
        #[from]
        source: FeedError,
    },
    #[error("failure operating on the travel graph: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("failure reading query pairs from {0}: {1}")]
    QueryReadError(String, String),
    #[error("failure writing query results to {0}: {1}")]
    ResultWriteError(String, String),
}
