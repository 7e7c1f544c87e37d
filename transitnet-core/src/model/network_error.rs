use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("invalid clock time '{0}', expected HH:MM:SS")]
    InvalidClockTime(String),
    #[error("edge references stop '{0}' not present as a graph node")]
    MissingEdgeEndpoint(String),
    #[error("negative weight {2} on edge '{0}' -> '{1}'")]
    NegativeEdgeWeight(String, String, f64),
    #[error("failure reading network artifact {0}: {1}")]
    ArtifactReadError(String, String),
    #[error("failure writing network artifact {0}: {1}")]
    ArtifactWriteError(String, String),
    #[error("failure building worker pool: {0}")]
    WorkerPoolError(String),
    #[error("travel time query {0} ('{1}' -> '{2}') failed: {3}")]
    QueryFailure(usize, String, String, String),
    #[error("{0}")]
    InternalError(String),
}
