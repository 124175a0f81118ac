//! Listing-portal scraper (Zillow / Realtor.com style search pages).
//!
//! These portals render most content with JavaScript, so a plain fetch
//! often yields little or nothing. Whatever server-rendered cards exist
//! are parsed best-effort; an empty result is normal and not an error.

use anyhow::Result;
use regex::Regex;
use scraper::{Html, Selector};

use crate::logger::Logger;
use crate::scrapers::{client, extract_number, parse_price};
use crate::types::{Property, Source};

const MAX_CARDS: usize = 40;

const CARD_SELECTORS: &[&str] = &[
    "article",
    "[class*=\"property-card\"]",
    "[class*=\"listing-card\"]",
    "[class*=\"result-card\"]",
    "[data-test=\"property-card\"]",
];

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
    logger.info(&format!("Successfully fetched {}", source.url));

    let properties = parse_listing_page(&html, source);
    logger.info(&format!(
        "Parsed {} listings from {}",
        properties.len(),
        source.name
    ));
    Ok(properties)
}

fn parse_listing_page(html: &str, source: &Source) -> Vec<Property> {
    let document = Html::parse_document(html);

    for selector_str in CARD_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        let properties: Vec<Property> = document
            .select(&selector)
            .take(MAX_CARDS)
            .filter_map(|card| {
                let text = card.text().collect::<Vec<_>>().join(" ");
                parse_listing_card(&text, source)
            })
            .collect();

        if !properties.is_empty() {
            return properties;
        }
    }

    vec![]
}

/// Pull structured fields out of a listing card's text. A card without a
/// street address or without a price is discarded.
fn parse_listing_card(text: &str, source: &Source) -> Option<Property> {
    let address_re =
        Regex::new(r"(?i)\d+\s+[A-Za-z][^|\n$]*?(?:,\s*fl\b|\bfl\b)\s*\d{0,5}").ok()?;
    let address = address_re.find(text)?.as_str().trim().to_string();

    let price_re = Regex::new(r"\$[\d,]+").ok()?;
    let price = parse_price(price_re.find(text)?.as_str());
    if price <= 0.0 {
        return None;
    }

    Some(Property {
        address,
        price,
        bedrooms: extract_number(text, r"(\d+)\s*bd") as u32,
        bathrooms: extract_number(text, r"(\d+\.?\d*)\s*ba"),
        sqft: extract_number(text, r"([\d,]+)\s*sq") as u32,
        year_built: extract_number(text, r"built[:\s]*(\d{4})") as i32,
        property_type: source.source_type.clone(),
        source: source.name.clone(),
        url: source.url.clone(),
        neighborhood: "Fort Lauderdale".to_string(),
        hoa_fees: extract_number(text, r"hoa[:\s]*\$?([\d,]+)"),
        description: String::new(),
        listing_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_source() -> Source {
        Source {
            name: "Zillow Fort Lauderdale".to_string(),
            source_type: "listing".to_string(),
            url: "https://www.zillow.com/fort-lauderdale-fl/".to_string(),
            enabled: true,
            scraper: "listing".to_string(),
        }
    }

    #[test]
    fn test_parse_listing_card() {
        let text = "456 Victoria Park Rd, Fort Lauderdale, FL 33304 $320,000 \
                    2 bd 2 ba 1,400 sqft Built: 1985 HOA: $350";
        let prop = parse_listing_card(text, &listing_source()).unwrap();
        assert_eq!(prop.price, 320_000.0);
        assert_eq!(prop.bedrooms, 2);
        assert_eq!(prop.sqft, 1400);
        assert_eq!(prop.year_built, 1985);
        assert_eq!(prop.hoa_fees, 350.0);
    }

    #[test]
    fn test_card_without_price_is_dropped() {
        let text = "456 Victoria Park Rd, Fort Lauderdale, FL 33304 2 bd 2 ba";
        assert!(parse_listing_card(text, &listing_source()).is_none());
    }

    #[test]
    fn test_parse_listing_page_falls_through_selectors() {
        let html = r#"
            <html><body>
              <div class="property-card">123 Sunrise Blvd, FL 33304 $410,000 3 bd 2 ba 1,900 sqft</div>
            </body></html>"#;
        let props = parse_listing_page(html, &listing_source());
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].price, 410_000.0);
    }

    #[test]
    fn test_js_only_page_yields_nothing() {
        let html = "<html><body><div id=\"app\"></div></body></html>";
        assert!(parse_listing_page(html, &listing_source()).is_empty());
    }
}
