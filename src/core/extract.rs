use crate::domain::model::Listing;
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Pulls all sim listings out of one result page.
///
/// A listing missing its price or carrier logo is skipped with a warning
/// instead of failing the page; a single malformed item on the site must not
/// abort the whole run.
pub fn listings_from_page(document: &Html) -> Vec<Listing> {
    let item_selector = Selector::parse("a.sim").unwrap();

    document
        .select(&item_selector)
        .filter_map(|item| match listing_from_item(item) {
            Ok(listing) => Some(listing),
            Err(e) => {
                tracing::warn!("skipping malformed listing: {}", e);
                None
            }
        })
        .collect()
}

fn listing_from_item(item: ElementRef) -> Result<Listing> {
    let price_selector = Selector::parse("div.sim__price").unwrap();
    let img_selector = Selector::parse("img").unwrap();

    let href = item
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::missing_element("a.sim href"))?;
    // The trailing path segment is the phone number, kept verbatim.
    let phone_number = href.rsplit('/').next().unwrap_or(href).to_string();

    let price_el = item
        .select(&price_selector)
        .next()
        .ok_or_else(|| ScrapeError::missing_element("div.sim__price"))?;
    let price = price_el.text().collect::<String>().trim().to_string();

    let img = item
        .select(&img_selector)
        .next()
        .ok_or_else(|| ScrapeError::missing_element("img"))?;
    let src = img
        .value()
        .attr("src")
        .ok_or_else(|| ScrapeError::missing_element("img src"))?;
    let carrier = carrier_from_logo_src(src);

    Ok(Listing {
        phone_number,
        price,
        carrier,
    })
}

/// Carrier name from a logo path: filename without extension, first letter
/// uppercased and the rest lowercased ("/logos/VIETTEL.png" -> "Viettel").
fn carrier_from_logo_src(src: &str) -> String {
    let filename = src.rsplit('/').next().unwrap_or(src);
    let stem = filename.split('.').next().unwrap_or(filename);

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
