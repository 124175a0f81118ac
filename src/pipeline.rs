//! Aggregation pipelines.
//!
//! Sequential, single-threaded: fetch a source, parse, filter/score,
//! record in the seen-cache, move on. A failing source is logged and
//! skipped; the remaining sources still run. A two-second courtesy delay
//! separates fetches so remote servers are not hammered.

use std::time::Duration;

use crate::analyze;
use crate::dedup::{identity, SeenStore};
use crate::filter;
use crate::logger::Logger;
use crate::scrapers;
use crate::types::{Article, ScoredProperty, SearchCriteria, Source};

const FETCH_DELAY: Duration = Duration::from_secs(2);

/// Run the property pipeline over every enabled source: filter against the
/// criteria, score, consult and update the seen-cache, and return the
/// survivors sorted by score descending.
pub fn search_all_sources(
    sources: &[Source],
    criteria: &SearchCriteria,
    store: &mut SeenStore,
    logger: &Logger,
) -> Vec<ScoredProperty> {
    let mut matching: Vec<ScoredProperty> = Vec::new();

    for (i, source) in sources.iter().filter(|s| s.enabled).enumerate() {
        if i > 0 {
            std::thread::sleep(FETCH_DELAY);
        }

        let properties = match scrapers::scrape_property_source(source, logger) {
            Ok(props) => props,
            Err(e) => {
                logger.error(&format!("Error searching {}: {}", source.name, e));
                continue;
            }
        };

        for prop in properties {
            if !filter::matches_criteria(&prop, criteria) {
                continue;
            }

            let mut scored = analyze::analyze_property(&prop, criteria);
            let id = identity(&prop.address, "");
            scored.is_new = store.is_new(&id);
            store.record_property(&id, prop.price);
            matching.push(scored);
        }
    }

    analyze::sort_by_score(&mut matching);
    logger.info(&format!(
        "Found {} properties matching criteria",
        matching.len()
    ));
    matching
}

/// Run the article pipeline: no filtering, no scoring. Every article is
/// recorded in the cache; only never-seen articles are returned, in
/// source-grouped encounter order.
pub fn scrape_all_article_sources(
    sources: &[Source],
    store: &mut SeenStore,
    logger: &Logger,
) -> Vec<Article> {
    let mut new_articles: Vec<Article> = Vec::new();

    for (i, source) in sources.iter().filter(|s| s.enabled).enumerate() {
        if i > 0 {
            std::thread::sleep(FETCH_DELAY);
        }

        let articles = match scrapers::scrape_article_source(source, logger) {
            Ok(articles) => articles,
            Err(e) => {
                logger.error(&format!("Error scraping {}: {}", source.name, e));
                continue;
            }
        };

        let mut fresh = 0;
        let total = articles.len();
        for article in articles {
            let id = identity(&article.title, &article.url);
            let is_new = store.is_new(&id);
            store.record_article(&id, &article);
            if is_new {
                fresh += 1;
                new_articles.push(article);
            }
        }

        logger.info(&format!(
            "  Found {} articles, {} are new",
            total, fresh
        ));
    }

    logger.info(&format!(
        "Total new articles found: {}",
        new_articles.len()
    ));
    new_articles
}
