use derive_more::Display;

/// Simplified error system - one variant per failure class of the loader.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Transport failure: DNS, CORS, connection reset...
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP Error: {} - {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    /// Body was not JSON or not an array of records
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
