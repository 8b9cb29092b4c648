//! Heading extraction from search-engine results markup.

use scraper::{Html, Selector};

/// CSS selectors tried in order against the results page. The first
/// selector that yields any text wins; later entries cover engines that
/// render plain `h3` headings instead of DuckDuckGo's result anchors.
const HEADING_SELECTORS: [&str; 3] = ["a.result__a", ".result__title a", "h3"];

/// Extract up to `max` result-heading strings from a results page.
///
/// Best-effort by design: unrecognized markup yields an empty vector, never
/// an error. Heading text is whitespace-collapsed; blank headings are
/// dropped.
#[must_use]
pub fn extract_result_headings(html: &str, max: usize) -> Vec<String> {
    let document = Html::parse_document(html);

    for selector in HEADING_SELECTORS {
        let Ok(selector) = Selector::parse(selector) else {
            continue;
        };

        let headings: Vec<String> = document
            .select(&selector)
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .take(max)
            .collect();

        if !headings.is_empty() {
            return headings;
        }
    }

    Vec::new()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
