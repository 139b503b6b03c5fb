use clap::Parser;
use sim_scrape::utils::logger;
use sim_scrape::{CliConfig, ScrapeConfig, ScrapeEngine, SimPipeline};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting sim-scrape");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ScrapeConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let pipeline = match SimPipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("❌ Failed to initialize pipeline: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let engine = ScrapeEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Scrape completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Scrape failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
