//! Interactive Fort Lauderdale house search.
//!
//! Collects (or reuses) search criteria, runs the property pipeline over
//! the configured sources and emails the report, falling back to a local
//! HTML file when email is not configured or fails.

use std::path::PathBuf;

use anyhow::Result;

use listing_scout::dedup::SeenStore;
use listing_scout::logger::Logger;
use listing_scout::types::SearchCriteria;
use listing_scout::{cli, notify, pipeline, report, storage};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let root = storage::root();
    let logger = Logger::new(&PathBuf::from(&root).join("house_search.log"));

    println!();
    println!("{}", "=".repeat(60));
    println!("FORT LAUDERDALE HOUSE SEARCH");
    println!("{}", "=".repeat(60));
    println!();

    let criteria = resolve_criteria(&root, &logger)?;

    println!();
    println!("{}", "-".repeat(60));
    println!("Starting search...");
    println!("{}", "-".repeat(60));
    println!();

    let sources = storage::load_sources(&root, "property_sources.json")?;
    let mut store = SeenStore::load(&storage::seen_properties_path(&root), &logger);
    let properties =
        pipeline::search_all_sources(&sources.sources, &criteria, &mut store, &logger);

    if let Err(e) = store.save() {
        logger.error(&format!("Could not save seen-property cache: {}", e));
    }
    logger.info(&format!(
        "Seen-property cache now holds {} entries",
        store.len()
    ));

    println!();
    println!("Found {} properties matching your criteria!", properties.len());

    if !properties.is_empty() {
        println!();
        println!("Top 5 properties:");
        println!();
        for (i, scored) in properties.iter().take(5).enumerate() {
            let prop = &scored.property;
            println!("{}. {}", i + 1, prop.address);
            println!(
                "   ${:.0} | {}bd {}ba | {} sqft",
                prop.price, prop.bedrooms, prop.bathrooms, prop.sqft
            );
            println!("   Score: {:.0}/100", scored.score);
            println!("   {}", scored.recommendation);
            println!();
        }
    }

    println!();
    println!("Generating and sending email report...");
    deliver_report(&root, &properties, &criteria, &logger);

    println!();
    println!("{}", "=".repeat(60));
    println!("Search complete! Check your email for the full report.");
    println!("{}", "=".repeat(60));
    println!();

    Ok(())
}

fn resolve_criteria(root: &str, logger: &Logger) -> Result<SearchCriteria> {
    if let Some(saved) = storage::load_criteria(root)? {
        if cli::prompt_yes_no("Use saved search criteria? (y/n): ") {
            return Ok(saved);
        }
    }

    let criteria = cli::collect_criteria();
    storage::save_criteria(root, &criteria)?;
    logger.info("Criteria saved to tracking/search_criteria.json");
    Ok(criteria)
}

fn deliver_report(
    root: &str,
    properties: &[listing_scout::types::ScoredProperty],
    criteria: &SearchCriteria,
    logger: &Logger,
) {
    if properties.is_empty() {
        logger.info("No properties to report");
        return;
    }

    let html = report::property_report_html(properties, criteria);
    let text = report::property_report_text(properties);

    let config = match notify::EmailConfig::from_env() {
        Some(config) => config,
        None => {
            logger.warn("Email credentials not configured. Saving report to file instead.");
            if let Err(e) = report::save_report_to_file(root, "house_search_report", &html, logger)
            {
                logger.error(&format!("Could not save report: {}", e));
            }
            return;
        }
    };

    let subject = format!(
        "Fort Lauderdale House Search Results - {}",
        chrono::Local::now().format("%Y-%m-%d")
    );

    logger.info(&format!("Sending email to {}...", criteria.email));
    match notify::send_report(&config, &criteria.email, &subject, html.clone(), text) {
        Ok(()) => logger.info("Email sent successfully!"),
        Err(e) => {
            logger.error(&format!("Error sending email: {}", e));
            logger.info("Saving report to file instead...");
            if let Err(e) = report::save_report_to_file(root, "house_search_report", &html, logger)
            {
                logger.error(&format!("Could not save report: {}", e));
            }
        }
    }
}
