//! Demo run with pre-configured criteria - no user input needed.
//!
//! Uses the built-in sample listings so the full pipeline can be seen
//! working without network access, then writes the HTML report locally.

use anyhow::Result;

use listing_scout::dedup::SeenStore;
use listing_scout::logger::Logger;
use listing_scout::types::{SearchCriteria, Source};
use listing_scout::{pipeline, report, storage};

fn main() -> Result<()> {
    let root = storage::root();
    let logger = Logger::stdout_only();

    println!();
    println!("{}", "=".repeat(70));
    println!("FORT LAUDERDALE HOUSE SEARCH - DEMO MODE");
    println!("{}", "=".repeat(70));
    println!();

    let criteria = SearchCriteria {
        max_budget: 500_000.0,
        min_budget: 250_000.0,
        min_bedrooms: 3,
        min_bathrooms: 2.0,
        preferred_neighborhoods: vec![
            "Las Olas".to_string(),
            "Victoria Park".to_string(),
            "Sailboat Bend".to_string(),
        ],
        property_types: vec![
            "single-family".to_string(),
            "townhouse".to_string(),
            "condo".to_string(),
        ],
        investment_focus: true,
        max_age_years: 50,
        min_sqft: 1400,
        max_hoa: 400.0,
        email: "demo@example.com".to_string(),
    };

    println!("Demo Search Criteria:");
    println!(
        "  Budget: ${:.0} - ${:.0}",
        criteria.min_budget, criteria.max_budget
    );
    println!(
        "  Bedrooms: {}+ | Bathrooms: {}+",
        criteria.min_bedrooms, criteria.min_bathrooms
    );
    println!("  Min Square Feet: {}", criteria.min_sqft);
    println!("  Max HOA: ${:.0}/month", criteria.max_hoa);
    println!("  Property Types: {}", criteria.property_types.join(", "));
    println!(
        "  Preferred Areas: {}",
        criteria.preferred_neighborhoods.join(", ")
    );
    println!("  Focus: Investment Properties");
    println!();
    println!("{}", "-".repeat(70));
    println!();

    let sample_source = Source {
        name: "Sample Data".to_string(),
        source_type: "sample".to_string(),
        url: String::new(),
        enabled: true,
        scraper: "sample".to_string(),
    };

    println!("Searching for properties...");
    println!();
    let mut store = SeenStore::load(&storage::seen_properties_path(&root), &logger);
    let properties =
        pipeline::search_all_sources(&[sample_source], &criteria, &mut store, &logger);

    if properties.is_empty() {
        println!("No properties found matching criteria.");
        return Ok(());
    }

    println!("Found {} properties!", properties.len());
    println!();
    println!("{}", "=".repeat(70));
    println!("TOP OPPORTUNITIES");
    println!("{}", "=".repeat(70));
    println!();

    for (i, scored) in properties.iter().take(10).enumerate() {
        let prop = &scored.property;
        println!("{}. {}", i + 1, prop.address);
        println!(
            "   Price: ${:.0} | {}bd {}ba | {} sqft",
            prop.price, prop.bedrooms, prop.bathrooms, prop.sqft
        );
        let built = if prop.year_built > 0 {
            prop.year_built.to_string()
        } else {
            "N/A".to_string()
        };
        println!("   Built: {} | Type: {}", built, prop.property_type);
        println!(
            "   HOA: ${:.0}/mo | Source: {}",
            prop.hoa_fees, prop.source
        );

        let price_per_sqft = if prop.sqft > 0 {
            prop.price / prop.sqft as f64
        } else {
            0.0
        };
        println!("   Price/sqft: ${:.0}", price_per_sqft);

        if criteria.investment_focus {
            let estimated_rent = prop.sqft as f64 * 1.75;
            let annual_rent = estimated_rent * 12.0;
            let noi = annual_rent * 0.70 - prop.hoa_fees * 12.0;
            let cap_rate = if prop.price > 0.0 {
                noi / prop.price * 100.0
            } else {
                0.0
            };
            println!(
                "   Est. Rent: ${:.0}/mo | Cap Rate: {:.1}%",
                estimated_rent, cap_rate
            );
        }

        println!();
        println!("   ANALYSIS SCORE: {:.0}/100", scored.score);
        println!("   {}", scored.recommendation);
        println!();
    }

    println!("{}", "=".repeat(70));
    println!();
    println!("Generating HTML report...");
    let html = report::property_report_html(&properties, &criteria);
    report::save_report_to_file(&root, "house_search_report", &html, &logger)?;
    println!();
    println!("Demo complete! Check the generated HTML report for full details.");
    println!();
    println!("{}", "=".repeat(70));
    println!("To run with your own criteria: house_search");
    println!("{}", "=".repeat(70));
    println!();

    Ok(())
}
