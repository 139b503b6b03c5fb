use crate::config::ScrapeConfig;
use crate::core::extract::listings_from_page;
use crate::core::filter::NumberFilter;
use crate::core::layout::build_table;
use crate::core::pagination::total_pages;
use crate::domain::model::{Listing, PageListings, SheetTable};
use crate::domain::ports::Pipeline;
use crate::export::xlsx::{self, SheetStyle};
use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;
use scraper::Html;
use std::path::Path;
use std::time::Duration;

/// The concrete scrape pipeline against a sim listing site: sequential page
/// loop with bounded retries, per-listing filtering, xlsx export.
pub struct SimPipeline {
    config: ScrapeConfig,
    filter: NumberFilter,
    client: Client,
}

impl SimPipeline {
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ScrapeError::ClientBuild)?;
        let filter = NumberFilter::new(config.blacklist.clone());

        Ok(Self {
            config,
            filter,
            client,
        })
    }

    async fn fetch_page(&self, page: u32) -> Result<String> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_fetch(page).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.config.retry_attempts => {
                    tracing::warn!(
                        "page {} attempt {}/{} failed: {}",
                        page,
                        attempt,
                        self.config.retry_attempts,
                        e
                    );
                    tokio::time::sleep(Duration::from_secs(self.config.retry_delay_seconds))
                        .await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_fetch(&self, page: u32) -> Result<String> {
        // Page 1 is the bare listing URL; later pages add the query.
        let request = if page <= 1 {
            self.client.get(&self.config.base_url)
        } else {
            self.client
                .get(&self.config.base_url)
                .query(&[("page", page)])
        };

        let response = request
            .send()
            .await
            .map_err(|source| ScrapeError::Fetch { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus { page, status });
        }

        response
            .text()
            .await
            .map_err(|source| ScrapeError::Fetch { page, source })
    }

    /// Parses one page body and filters the listings. `Html` is not `Send`,
    /// so parsing stays inside this synchronous helper.
    fn accepted_from_body(&self, body: &str) -> Result<Vec<Listing>> {
        let document = Html::parse_document(body);
        let listings = listings_from_page(&document);
        self.accept(listings)
    }

    fn accept(&self, listings: Vec<Listing>) -> Result<Vec<Listing>> {
        let mut kept = Vec::with_capacity(listings.len());
        for listing in listings {
            if !self.filter.is_unwanted(&listing.phone_number)? {
                kept.push(listing);
            }
        }
        Ok(kept)
    }
}

#[async_trait::async_trait]
impl Pipeline for SimPipeline {
    async fn extract(&self) -> Result<Vec<PageListings>> {
        let first_body = self.fetch_page(1).await?;

        let total = {
            let document = Html::parse_document(&first_body);
            total_pages(&document)
        };
        let total = match self.config.max_pages {
            Some(cap) => total.min(cap.max(1)),
            None => total,
        };
        tracing::info!("Listing has {} page(s)", total);

        let mut pages = Vec::with_capacity(total as usize);

        tracing::info!("Fetching page 1/{}", total);
        pages.push(PageListings {
            page: 1,
            listings: self.accepted_from_body(&first_body)?,
        });

        for page in 2..=total {
            tracing::info!("Fetching page {}/{}", page, total);
            let body = self.fetch_page(page).await?;
            pages.push(PageListings {
                page,
                listings: self.accepted_from_body(&body)?,
            });
        }

        Ok(pages)
    }

    async fn transform(&self, pages: Vec<PageListings>) -> Result<SheetTable> {
        Ok(build_table(pages, self.config.layout))
    }

    async fn load(&self, table: SheetTable) -> Result<String> {
        let output_dir = Path::new(&self.config.output_path);
        std::fs::create_dir_all(output_dir)?;

        let filename = xlsx::timestamped_filename(&self.config.filename_prefix);
        let path = output_dir.join(&filename);
        let style = SheetStyle {
            column_width: self.config.column_width,
            font_size: self.config.font_size,
        };

        xlsx::write_table(&table, &path, &style)?;

        Ok(path.to_string_lossy().into_owned())
    }
}
