#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid dictionary URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Selection unavailable: {0}")]
    Unavailable(String),

    #[error("Rich text conversion failed: {0}")]
    Conversion(String),
}
