//! Domain error types.

/// Top-level error type for twr.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("no daily market values informed")]
    EmptyData,

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to load {path}: {reason}")]
    DataLoad { path: String, reason: String },
}

impl From<&PortfolioError> for std::process::ExitCode {
    fn from(err: &PortfolioError) -> Self {
        let code: u8 = match err {
            PortfolioError::ConfigParse { .. }
            | PortfolioError::ConfigMissing { .. }
            | PortfolioError::ConfigInvalid { .. } => 2,
            PortfolioError::DataLoad { .. } => 3,
            PortfolioError::EmptyData => 5,
        };
        std::process::ExitCode::from(code)
    }
}
