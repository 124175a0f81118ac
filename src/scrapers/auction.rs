//! Broward County foreclosure-auction scraper.
//!
//! The auction list is a loosely structured page; rows are identified by a
//! class containing "listing", "property" or "auction" and the interesting
//! fields are pulled out of the row text with regexes. Rows that do not
//! yield an address are skipped individually.

use anyhow::Result;
use regex::Regex;
use scraper::{Html, Selector};

use crate::logger::Logger;
use crate::scrapers::{client, extract_number, parse_price};
use crate::types::{Property, Source};

const MAX_LISTINGS: usize = 50;

pub fn scrape(source: &Source, logger: &Logger) -> Result<Vec<Property>> {
    logger.info(&format!("Searching {}...", source.name));

    let response = client(30)?.get(&source.url).send()?;
    if !response.status().is_success() {
        logger.warn(&format!(
            "{} returned HTTP {}",
            source.name,
            response.status().as_u16()
        ));
        return Ok(vec![]);
    }

    let html = response.text()?;
    let properties = parse_auction_page(&html, source, logger);
    logger.info(&format!(
        "Found {} auction properties at {}",
        properties.len(),
        source.name
    ));
    Ok(properties)
}

fn parse_auction_page(html: &str, source: &Source, logger: &Logger) -> Vec<Property> {
    let document = Html::parse_document(html);
    let (row_selector, class_re) = match (
        Selector::parse("div, tr"),
        Regex::new(r"(?i)listing|property|auction"),
    ) {
        (Ok(sel), Ok(re)) => (sel, re),
        _ => return Vec::new(),
    };

    document
        .select(&row_selector)
        .filter(|row| {
            row.value()
                .attr("class")
                .map(|c| class_re.is_match(c))
                .unwrap_or(false)
        })
        .take(MAX_LISTINGS)
        .filter_map(|row| {
            let text = row.text().collect::<Vec<_>>().join(" ");
            match parse_auction_listing(&text, source) {
                Some(prop) => Some(prop),
                None => {
                    logger.warn("Skipping auction row without a parsable address");
                    None
                }
            }
        })
        .collect()
}

/// Parse a single auction row. Returns None when no address can be found;
/// all other fields are best-effort with zero defaults.
fn parse_auction_listing(text: &str, source: &Source) -> Option<Property> {
    let address_re =
        Regex::new(r"(?i)\d+[^\n$]*?(?:fort lauderdale(?:,\s*fl)?|\bfl\b)(?:\s*\d{5})?").ok()?;
    let address = address_re.find(text)?.as_str().trim().to_string();

    let price = Regex::new(r"\$[\d,]+")
        .ok()
        .and_then(|re| re.find(text).map(|m| parse_price(m.as_str())))
        .unwrap_or(0.0);

    Some(Property {
        address,
        price,
        bedrooms: extract_number(text, r"(\d+)\s*bd") as u32,
        bathrooms: extract_number(text, r"(\d+\.?\d*)\s*ba"),
        sqft: extract_number(text, r"([\d,]+)\s*sq") as u32,
        year_built: 0,
        property_type: "auction".to_string(),
        source: source.name.clone(),
        url: source.url.clone(),
        neighborhood: "Fort Lauderdale".to_string(),
        hoa_fees: 0.0,
        description: "Foreclosure Auction Property".to_string(),
        listing_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
    })
}
