use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting scrape");

        let pages = self.pipeline.extract().await?;
        let accepted: usize = pages.iter().map(|p| p.listings.len()).sum();
        tracing::info!("Collected {} listings from {} pages", accepted, pages.len());

        let table = self.pipeline.transform(pages).await?;

        let output_path = self.pipeline.load(table).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
