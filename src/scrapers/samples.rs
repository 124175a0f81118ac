//! Built-in sample listings used by the demo binary and as a demonstration
//! source, so the pipeline produces output even when every live source is
//! unreachable or JavaScript-only.

use crate::types::Property;

pub fn sample_properties() -> Vec<Property> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    vec![
        Property {
            address: "123 Las Olas Blvd, Fort Lauderdale, FL 33301".to_string(),
            price: 450_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft: 1800,
            year_built: 2005,
            property_type: "single-family".to_string(),
            source: "Sample Data".to_string(),
            url: "https://example.com/property1".to_string(),
            neighborhood: "Las Olas".to_string(),
            hoa_fees: 200.0,
            description: "Beautiful waterfront property with updated kitchen".to_string(),
            listing_date: today.clone(),
        },
        Property {
            address: "456 Victoria Park Rd, Fort Lauderdale, FL 33304".to_string(),
            price: 320_000.0,
            bedrooms: 2,
            bathrooms: 2.0,
            sqft: 1400,
            year_built: 1985,
            property_type: "condo".to_string(),
            source: "Sample Data".to_string(),
            url: "https://example.com/property2".to_string(),
            neighborhood: "Victoria Park".to_string(),
            hoa_fees: 350.0,
            description: "Updated condo in prime location, pool and gym".to_string(),
            listing_date: today.clone(),
        },
        Property {
            address: "789 Sailboat Dr, Fort Lauderdale, FL 33315".to_string(),
            price: 275_000.0,
            bedrooms: 3,
            bathrooms: 2.5,
            sqft: 1650,
            year_built: 1978,
            property_type: "townhouse".to_string(),
            source: "Sample Auction".to_string(),
            url: "https://example.com/auction1".to_string(),
            neighborhood: "Sailboat Bend".to_string(),
            hoa_fees: 150.0,
            description: "Foreclosure auction - needs renovation, great bones".to_string(),
            listing_date: today.clone(),
        },
        Property {
            address: "321 Sunrise Blvd, Fort Lauderdale, FL 33304".to_string(),
            price: 525_000.0,
            bedrooms: 4,
            bathrooms: 3.0,
            sqft: 2200,
            year_built: 2010,
            property_type: "single-family".to_string(),
            source: "Sample Data".to_string(),
            url: "https://example.com/property3".to_string(),
            neighborhood: "Sunrise East".to_string(),
            hoa_fees: 0.0,
            description: "Modern home with pool, hurricane impact windows".to_string(),
            listing_date: today,
        },
    ]
}
