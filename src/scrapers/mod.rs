mod auction;
mod blog;
mod listing;
mod samples;

use std::time::Duration;

use anyhow::Result;

use crate::logger::Logger;
use crate::types::{Article, Property, Source};

pub use samples::sample_properties;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Shared blocking HTTP client for all scrapers.
pub fn client(timeout_secs: u64) -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}

/// Fetch and parse one property source. Unknown scraper kinds are logged
/// and yield nothing rather than failing the run.
pub fn scrape_property_source(source: &Source, logger: &Logger) -> Result<Vec<Property>> {
    match source.scraper.as_str() {
        "auction" => auction::scrape(source, logger),
        "listing" => listing::scrape(source, logger),
        "sample" => Ok(samples::sample_properties()),
        other => {
            logger.warn(&format!("Unknown scraper type: {}", other));
            Ok(vec![])
        }
    }
}

/// Fetch and parse one article source (generic blog/news layout).
pub fn scrape_article_source(source: &Source, logger: &Logger) -> Result<Vec<Article>> {
    blog::scrape(source, logger)
}

/// Extract the first comma-grouped number from free text ("$425,000" -> 425000).
pub(crate) fn parse_price(text: &str) -> f64 {
    if let Ok(re) = regex::Regex::new(r"[\d,]+") {
        if let Some(m) = re.find(text) {
            if let Ok(value) = m.as_str().replace(',', "").parse::<f64>() {
                return value;
            }
        }
    }
    0.0
}

/// Extract the first capture of `pattern` from text as a number, tolerating
/// thousands separators. Returns 0 when nothing matches.
pub(crate) fn extract_number(text: &str, pattern: &str) -> f64 {
    if let Ok(re) = regex::Regex::new(&format!("(?i){}", pattern)) {
        if let Some(caps) = re.captures(text) {
            if let Some(m) = caps.get(1) {
                if let Ok(value) = m.as_str().replace(',', "").parse::<f64>() {
                    return value;
                }
            }
        }
    }
    0.0
}
