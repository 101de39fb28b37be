use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrecinctError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown dataverse: {0}")]
    UnknownDataverse(String),

    #[error("documentation mismatch for dataverse '{dataverse}': {detail}")]
    Documentation { dataverse: String, detail: String },

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, PrecinctError>;
