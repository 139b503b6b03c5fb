use crate::domain::model::{Listing, PageListings, SheetLayout, SheetTable};

/// Shapes accepted listings into the table the exporter writes.
pub fn build_table(pages: Vec<PageListings>, layout: SheetLayout) -> SheetTable {
    match layout {
        SheetLayout::Flat => flat_table(pages),
        SheetLayout::PerPage => per_page_table(pages),
    }
}

/// Variant A: one row per listing across all pages, stable-sorted by the
/// first three characters of the phone number.
fn flat_table(pages: Vec<PageListings>) -> SheetTable {
    let mut listings: Vec<Listing> = pages.into_iter().flat_map(|p| p.listings).collect();
    listings.sort_by(|a, b| prefix(&a.phone_number).cmp(prefix(&b.phone_number)));

    SheetTable {
        columns: vec!["Số".to_string(), "Giá".to_string(), "Nhà mạng".to_string()],
        rows: listings
            .into_iter()
            .map(|l| vec![l.phone_number, l.price, l.carrier])
            .collect(),
    }
}

fn prefix(phone_number: &str) -> &str {
    let end = phone_number
        .char_indices()
        .nth(3)
        .map(|(i, _)| i)
        .unwrap_or(phone_number.len());
    &phone_number[..end]
}

/// Variant B: one column per page, each cell a composite listing string,
/// shorter pages padded with blanks to the longest page's length.
fn per_page_table(pages: Vec<PageListings>) -> SheetTable {
    let height = pages.iter().map(|p| p.listings.len()).max().unwrap_or(0);

    let columns = pages.iter().map(|p| format!("Trang {}", p.page)).collect();
    let cells: Vec<Vec<String>> = pages
        .into_iter()
        .map(|p| {
            let mut column: Vec<String> = p
                .listings
                .into_iter()
                .map(|l| {
                    format!(
                        "Số: {}, Giá: {}, Nhà mạng: {}",
                        l.phone_number, l.price, l.carrier
                    )
                })
                .collect();
            column.resize(height, String::new());
            column
        })
        .collect();

    // Transpose page columns into row-major sheet rows.
    let rows = (0..height)
        .map(|row| cells.iter().map(|column| column[row].clone()).collect())
        .collect();

    SheetTable { columns, rows }
}
