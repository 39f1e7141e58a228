use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid URL template \"{input}\" (must contain {{month}})")]
    InvalidTemplate { input: String },

    #[error("Failed to fetch {target}: {message}")]
    Fetch { target: String, message: String },

    #[error("Malformed record for {date}: \"{candidate}\" has no artist/title separator")]
    MalformedRecord { date: String, candidate: String },

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
