//! Escape-room industry news scraper.
//!
//! Scrapes the configured blog/news sources, deduplicates against the
//! seen-article cache and emails a digest of never-seen articles with
//! mailto feedback links.

use std::path::PathBuf;

use anyhow::Result;

use listing_scout::dedup::SeenStore;
use listing_scout::logger::Logger;
use listing_scout::{notify, pipeline, report, storage};

fn main() -> Result<()> {
    if dotenvy::dotenv().is_err() {
        println!("WARNING: No .env file found. Email notifications may be disabled.");
        println!();
    }

    let root = storage::root();
    let logger = Logger::new(&PathBuf::from(&root).join("escape_news.log"));

    println!("{}", "=".repeat(60));
    println!("Escape Room Industry News Scraper");
    println!("{}", "=".repeat(60));

    let sources = storage::load_sources(&root, "escape_room_sources.json")?;
    logger.info(&format!("Scraping {} sources...", sources.sources.len()));

    let mut store = SeenStore::load(&storage::seen_articles_path(&root), &logger);
    let new_articles = pipeline::scrape_all_article_sources(&sources.sources, &mut store, &logger);

    if let Err(e) = store.save() {
        logger.error(&format!("Could not save seen-article cache: {}", e));
    }
    logger.info(&format!(
        "Seen-article cache now holds {} entries",
        store.len()
    ));

    let send_email = std::env::var("SEND_EMAIL")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    if send_email && !new_articles.is_empty() {
        let recipient = std::env::var("RECIPIENT_EMAIL").unwrap_or_default();
        let html = report::article_digest_html(&new_articles, &recipient);
        let text = report::article_digest_text(&new_articles);
        let subject = format!(
            "Escape Room News Update - {} New Article(s)",
            new_articles.len()
        );

        match notify::EmailConfig::from_env() {
            Some(config) if !recipient.is_empty() => {
                logger.info(&format!("Sending email to {}...", recipient));
                match notify::send_report(&config, &recipient, &subject, html.clone(), text) {
                    Ok(()) => logger.info("Email sent successfully!"),
                    Err(e) => {
                        logger.error(&format!("Error sending email: {}", e));
                        if let Err(e) =
                            report::save_report_to_file(&root, "escape_news_report", &html, &logger)
                        {
                            logger.error(&format!("Could not save report: {}", e));
                        }
                    }
                }
            }
            _ => {
                logger.warn("Email configuration is incomplete. Saving digest to file instead.");
                if let Err(e) =
                    report::save_report_to_file(&root, "escape_news_report", &html, &logger)
                {
                    logger.error(&format!("Could not save report: {}", e));
                }
            }
        }
    }

    println!();
    println!("{}", "=".repeat(60));
    println!(
        "Scraping complete! Found {} new articles.",
        new_articles.len()
    );
    println!("{}", "=".repeat(60));

    if new_articles.is_empty() {
        println!();
        println!("No new articles found. All articles have been seen before.");
    } else {
        println!();
        println!("New Articles:");
        for (i, article) in new_articles.iter().enumerate() {
            println!();
            println!("{}. {}", i + 1, article.title);
            println!("   Source: {}", article.source);
            println!("   URL: {}", article.url);
        }
    }

    Ok(())
}
