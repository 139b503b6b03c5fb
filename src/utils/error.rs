use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request for page {page} failed: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page} returned HTTP {status}")]
    HttpStatus {
        page: u32,
        status: reqwest::StatusCode,
    },

    #[error("listing is missing expected element: {what}")]
    MissingElement { what: String },

    #[error("empty phone number reached the filter")]
    InvalidInput,

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for {field} ({value}): {reason}")]
    ConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}

impl ScrapeError {
    pub fn missing_element(what: impl Into<String>) -> Self {
        ScrapeError::MissingElement { what: what.into() }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
