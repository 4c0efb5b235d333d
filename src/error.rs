use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EpsError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid evaluation file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid input: {field} must be >= 0 (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("invalid weight: {field} must be in [{min}, {max}] (got {value})")]
    WeightOutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl EpsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EpsError::Io {
            path: path.into(),
            source,
        }
    }
}
