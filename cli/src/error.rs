use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("public inputs error: {0}")]
    Inputs(#[from] inputs::error::Error),

    #[error("disclosure error: {0}")]
    Disclosure(#[from] disclosure::error::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
