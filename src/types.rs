use serde::{Deserialize, Serialize};

/// User's search criteria, collected interactively and persisted for reuse.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchCriteria {
    pub max_budget: f64,
    pub min_budget: f64,
    pub min_bedrooms: u32,
    pub min_bathrooms: f64,
    pub preferred_neighborhoods: Vec<String>,
    pub property_types: Vec<String>,
    pub investment_focus: bool,
    pub max_age_years: u32,
    pub min_sqft: u32,
    pub max_hoa: f64,
    pub email: String,
}

/// A listed property as extracted by a scraper. The address is the unique key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Property {
    pub address: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft: u32,
    pub year_built: i32,
    pub property_type: String,
    pub source: String,
    pub url: String,
    pub neighborhood: String,
    pub hoa_fees: f64,
    pub description: String,
    pub listing_date: String,
}

/// A property together with its computed analysis. Built atomically by the
/// scorer so a property is never carried around half-analyzed.
#[derive(Debug, Clone)]
pub struct ScoredProperty {
    pub property: Property,
    pub score: f64,
    pub reasons: Vec<String>,
    pub recommendation: String,
    /// Set by the pipeline from the seen-cache; the scorer leaves it true.
    pub is_new: bool,
}

/// An industry news article. Identity is the hash of (title, url).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub date: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SourcesFile {
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Source {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
    pub url: String,
    pub enabled: bool,
    pub scraper: String,
}
