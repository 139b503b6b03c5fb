use scraper::{Html, Selector};

/// Resolves the total page count from the first result page.
///
/// The pagination control is a `div.pagination` holding anchors whose texts
/// are either page numbers or navigation labels ("Next"). The answer is the
/// largest purely numeric anchor text; no control or no numeric anchors
/// means a single page.
pub fn total_pages(document: &Html) -> u32 {
    let pagination_selector = Selector::parse("div.pagination").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let Some(pagination) = document.select(&pagination_selector).next() else {
        return 1;
    };

    pagination
        .select(&anchor_selector)
        .filter_map(|anchor| {
            let text: String = anchor.text().collect();
            text.trim().parse::<u32>().ok()
        })
        .max()
        .unwrap_or(1)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_anchors_yield_max() {
        let html = Html::parse_document(
            r#"<div class="pagination">
                <a href="?page=1">1</a>
                <a href="?page=2">2</a>
                <a href="?page=3">3</a>
                <a href="?page=2">Next</a>
            </div>"#,
        );
        assert_eq!(total_pages(&html), 3);
    }

    #[test]
    fn test_missing_pagination_means_one_page() {
        let html = Html::parse_document("<div class='listings'></div>");
        assert_eq!(total_pages(&html), 1);
    }

    #[test]
    fn test_only_navigation_labels_means_one_page() {
        let html = Html::parse_document(
            r#"<div class="pagination"><a>Prev</a><a>Next</a></div>"#,
        );
        assert_eq!(total_pages(&html), 1);
    }

    #[test]
    fn test_anchors_out_of_order() {
        let html = Html::parse_document(
            r#"<div class="pagination"><a>7</a><a>2</a><a>5</a></div>"#,
        );
        assert_eq!(total_pages(&html), 7);
    }
}
