use crate::domain::model::{PageListings, SheetTable};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The three-stage scrape pipeline: fetch and filter every page, shape the
/// accepted listings into a sheet table, write the spreadsheet.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PageListings>>;
    async fn transform(&self, pages: Vec<PageListings>) -> Result<SheetTable>;
    async fn load(&self, table: SheetTable) -> Result<String>;
}
