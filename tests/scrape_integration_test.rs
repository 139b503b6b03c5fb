use httpmock::prelude::*;
use sim_scrape::domain::model::SheetLayout;
use sim_scrape::{ScrapeConfig, ScrapeEngine, SimPipeline};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

const LISTING_PAGE: &str = r#"
<html><body>
    <div class="pagination">
        <a href="?page=1">1</a>
        <a href="?page=2">2</a>
        <a href="?page=2">Next</a>
    </div>
    <div class="listings">
        <a class="sim" href="/sim/0912345675">
            <div class="sim__price">1.500.000đ</div>
            <img src="/logos/viettel.png">
        </a>
        <a class="sim" href="/sim/0915567890">
            <div class="sim__price">2.000.000đ</div>
            <img src="/logos/mobifone.png">
        </a>
        <a class="sim" href="/sim/0712345670">
            <div class="sim__price">900.000đ</div>
            <img src="/logos/vinaphone.png">
        </a>
    </div>
</body></html>"#;

fn test_config(base_url: String, output_path: String, layout: SheetLayout) -> ScrapeConfig {
    ScrapeConfig {
        base_url,
        output_path,
        layout,
        retry_delay_seconds: 0,
        ..ScrapeConfig::default()
    }
}

#[tokio::test]
async fn test_end_to_end_scrape_writes_spreadsheet() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    // One mock serves every page request; pagination advertises two pages,
    // so the pipeline must hit it twice.
    let listing_mock = server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(LISTING_PAGE);
    });

    let config = test_config(server.url("/list"), output_path.clone(), SheetLayout::Flat);
    let pipeline = SimPipeline::new(config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok(), "scrape failed: {:?}", result.err());
    listing_mock.assert_hits(2);

    let output_file = result.unwrap();
    assert!(output_file.contains("sim_filtered_"));
    assert!(output_file.ends_with(".xlsx"));

    // Exactly one file, and it is a real xlsx (zip) container.
    let entries: Vec<_> = std::fs::read_dir(&output_path)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    let bytes = std::fs::read(&entries[0]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_end_to_end_per_page_layout() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let listing_mock = server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(LISTING_PAGE);
    });

    let config = test_config(
        server.url("/list"),
        output_path.clone(),
        SheetLayout::PerPage,
    );
    let pipeline = SimPipeline::new(config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok(), "scrape failed: {:?}", result.err());
    listing_mock.assert_hits(2);
}

#[tokio::test]
async fn test_max_pages_caps_the_fetch_loop() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let listing_mock = server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(LISTING_PAGE);
    });

    let mut config = test_config(server.url("/list"), output_path, SheetLayout::Flat);
    config.max_pages = Some(1);

    let pipeline = SimPipeline::new(config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    engine.run().await.unwrap();
    listing_mock.assert_hits(1);
}

#[tokio::test]
async fn test_server_errors_are_retried_then_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(500);
    });

    let mut config = test_config(server.url("/list"), output_path.clone(), SheetLayout::Flat);
    config.retry_attempts = 3;

    let pipeline = SimPipeline::new(config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_err());
    failing_mock.assert_hits(3);

    // Fatal failure before the load stage: nothing was written.
    assert_eq!(std::fs::read_dir(&output_path).unwrap().count(), 0);
}

#[tokio::test]
async fn test_transient_server_error_recovers_on_retry() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();

    // The two mocks share an attempt counter so exactly the first request
    // fails and every later one succeeds, whatever order the server
    // evaluates them in. httpmock's `matches` takes a plain fn pointer,
    // so the counter lives in a static rather than a captured Arc.
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    let flaky_mock = {
        server.mock(move |when, then| {
            when.method(GET)
                .path("/list")
                .matches(|_| ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0);
            then.status(500);
        })
    };
    let recovered_mock = {
        server.mock(move |when, then| {
            when.method(GET)
                .path("/list")
                .matches(|_| ATTEMPTS.load(Ordering::SeqCst) > 0);
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(
                    r#"<a class="sim" href="/sim/0123456785">
                        <div class="sim__price">1tr</div>
                        <img src="/logos/viettel.png">
                    </a>"#,
                );
        })
    };

    let config = test_config(server.url("/list"), output_path.clone(), SheetLayout::Flat);
    let pipeline = SimPipeline::new(config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok(), "scrape failed: {:?}", result.err());
    flaky_mock.assert_hits(1);
    recovered_mock.assert_hits(1);

    // The retried run still produces the spreadsheet.
    let entries: Vec<_> = std::fs::read_dir(&output_path)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    let bytes = std::fs::read(&entries[0]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_page_without_pagination_is_a_single_page() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let listing_mock = server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(
                r#"<a class="sim" href="/sim/0123456785">
                    <div class="sim__price">1tr</div>
                    <img src="/logos/viettel.png">
                </a>"#,
            );
    });

    let config = test_config(server.url("/list"), output_path, SheetLayout::Flat);
    let pipeline = SimPipeline::new(config).unwrap();
    let engine = ScrapeEngine::new(pipeline);

    engine.run().await.unwrap();
    listing_mock.assert_hits(1);
}
