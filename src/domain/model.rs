use serde::{Deserialize, Serialize};

/// One scraped sim listing. The phone number is the literal digit string taken
/// from the listing URL's trailing path segment and is never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub phone_number: String,
    pub price: String,
    pub carrier: String,
}

/// Accepted listings of a single result page, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageListings {
    pub page: u32,
    pub listings: Vec<Listing>,
}

/// Shape of the output sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheetLayout {
    /// One row per listing across all pages, sorted by the first three digits
    /// of the phone number.
    #[default]
    Flat,
    /// One column per page, cells holding a composite listing string, short
    /// pages padded with blanks.
    PerPage,
}

/// Layout-agnostic table handed to the exporter. Rows are row-major and
/// already padded to the column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
