//! Daily scheduler for the Fort Lauderdale house search.
//!
//! Prompts for a wall-clock run time, optionally runs immediately, then
//! executes the property pipeline once per day using the saved criteria.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use listing_scout::dedup::SeenStore;
use listing_scout::logger::Logger;
use listing_scout::{notify, pipeline, report, schedule, storage};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let root = storage::root();
    let logger = Logger::new(&PathBuf::from(&root).join("daily_search.log"));

    println!("Fort Lauderdale House Search - Daily Scheduler");
    println!("{}", "=".repeat(60));
    println!();
    println!("What time should the search run daily?");

    let input = read_line("Enter time (HH:MM in 24-hour format, e.g., 09:00): ");
    let target = schedule::parse_schedule_time(&input);

    println!();
    println!("Scheduling daily search at {}", target.format("%H:%M"));

    if read_line("\nRun search now? (y/n): ")
        .to_lowercase()
        .starts_with('y')
    {
        run_search(&root, &logger);
    }

    println!();
    println!("Press Ctrl+C to stop");
    println!();

    schedule::run_daily(target, &logger, || run_search(&root, &logger));
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

/// One scheduled run. Errors are logged, never propagated: tomorrow's run
/// must still happen.
fn run_search(root: &str, logger: &Logger) {
    logger.info(&"=".repeat(60));
    logger.info(&format!("Starting daily search at {}", chrono::Local::now()));
    logger.info(&"=".repeat(60));

    let criteria = match storage::load_criteria(root) {
        Ok(Some(criteria)) => criteria,
        Ok(None) => {
            logger.error("No saved criteria found! Please run house_search first.");
            return;
        }
        Err(e) => {
            logger.error(&format!("Could not load criteria: {}", e));
            return;
        }
    };

    let sources = match storage::load_sources(root, "property_sources.json") {
        Ok(sources) => sources,
        Err(e) => {
            logger.error(&format!("Could not load sources: {}", e));
            return;
        }
    };

    let mut store = SeenStore::load(&storage::seen_properties_path(root), logger);
    let properties = pipeline::search_all_sources(&sources.sources, &criteria, &mut store, logger);
    if let Err(e) = store.save() {
        logger.error(&format!("Could not save seen-property cache: {}", e));
    }

    logger.info(&format!("Found {} properties", properties.len()));

    if properties.is_empty() {
        logger.info("No properties found matching criteria");
    } else {
        let html = report::property_report_html(&properties, &criteria);
        let text = report::property_report_text(&properties);
        let subject = format!(
            "Fort Lauderdale House Search Results - {}",
            chrono::Local::now().format("%Y-%m-%d")
        );

        match notify::EmailConfig::from_env() {
            Some(config) => {
                match notify::send_report(&config, &criteria.email, &subject, html.clone(), text) {
                    Ok(()) => logger.info("Email report sent successfully"),
                    Err(e) => {
                        logger.error(&format!("Error sending email: {}", e));
                        if let Err(e) =
                            report::save_report_to_file(root, "house_search_report", &html, logger)
                        {
                            logger.error(&format!("Could not save report: {}", e));
                        }
                    }
                }
            }
            None => {
                logger.warn("Email credentials not configured. Saving report to file instead.");
                if let Err(e) =
                    report::save_report_to_file(root, "house_search_report", &html, logger)
                {
                    logger.error(&format!("Could not save report: {}", e));
                }
            }
        }
    }

    logger.info(&"=".repeat(60));
    logger.info("Daily search complete");
    logger.info(&"=".repeat(60));
}
