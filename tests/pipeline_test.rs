//! End-to-end tests for the filter -> score -> dedup -> report pipeline
//! using the built-in sample source, so no network access is needed.

use listing_scout::dedup::{identity, SeenStore};
use listing_scout::logger::Logger;
use listing_scout::types::{Article, SearchCriteria, Source};
use listing_scout::{pipeline, report, storage};

fn sample_source() -> Source {
    Source {
        name: "Sample Data".to_string(),
        source_type: "sample".to_string(),
        url: String::new(),
        enabled: true,
        scraper: "sample".to_string(),
    }
}

fn demo_criteria() -> SearchCriteria {
    SearchCriteria {
        max_budget: 500_000.0,
        min_budget: 250_000.0,
        min_bedrooms: 3,
        min_bathrooms: 2.0,
        preferred_neighborhoods: vec!["Las Olas".to_string(), "Sailboat Bend".to_string()],
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
    }
}

#[test]
fn full_property_run_persists_cache_across_processes() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let logger = Logger::stdout_only();
    let criteria = demo_criteria();
    let sources = vec![sample_source()];

    // First run: everything is new and the cache file is written.
    {
        let mut store = SeenStore::load(&storage::seen_properties_path(root), &logger);
        let results = pipeline::search_all_sources(&sources, &criteria, &mut store, &logger);
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.is_new));
        store.save().unwrap();
    }
    assert!(storage::seen_properties_path(root).exists());

    // Second run, fresh store from disk: same properties, now seen.
    {
        let mut store = SeenStore::load(&storage::seen_properties_path(root), &logger);
        let results = pipeline::search_all_sources(&sources, &criteria, &mut store, &logger);
        assert!(results.iter().all(|p| !p.is_new));
    }
}

#[test]
fn report_renders_pipeline_output() {
    let logger = Logger::stdout_only();
    let dir = tempfile::tempdir().unwrap();
    let mut store = SeenStore::load(&dir.path().join("seen.json"), &logger);
    let criteria = demo_criteria();

    let results =
        pipeline::search_all_sources(&[sample_source()], &criteria, &mut store, &logger);
    let html = report::property_report_html(&results, &criteria);

    // Best-scored property leads the report body.
    let first = &results[0].property.address;
    let second = &results[1].property.address;
    assert!(html.find(first.as_str()).unwrap() < html.find(second.as_str()).unwrap());
    assert!(html.contains("NEW"));
}

#[test]
fn corrupt_cache_does_not_abort_a_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let logger = Logger::stdout_only();

    let cache_path = storage::seen_properties_path(root);
    std::fs::create_dir_all(cache_path.parent().unwrap()).unwrap();
    std::fs::write(&cache_path, "{{{{ definitely not json").unwrap();

    let mut store = SeenStore::load(&cache_path, &logger);
    let results =
        pipeline::search_all_sources(&[sample_source()], &demo_criteria(), &mut store, &logger);
    assert!(!results.is_empty());
    assert!(results.iter().all(|p| p.is_new));
    store.save().unwrap();

    // The rewritten cache is valid again.
    let reloaded = SeenStore::load(&cache_path, &logger);
    assert!(!reloaded.is_empty());
}

#[test]
fn article_dedup_surfaces_only_fresh_articles() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::stdout_only();
    let mut store = SeenStore::load(&dir.path().join("seen_articles.json"), &logger);

    let article = Article {
        title: "Escape room industry rebounds in Q3".to_string(),
        url: "https://example.com/rebound".to_string(),
        source: "Escape Room Tips".to_string(),
        date: "2026-08-29".to_string(),
    };

    let id = identity(&article.title, &article.url);
    assert!(store.is_new(&id));
    store.record_article(&id, &article);
    assert!(!store.is_new(&id), "second encounter must be seen");

    // Recording again never resurfaces the article as new.
    store.record_article(&id, &article);
    assert!(!store.is_new(&id));
}

#[test]
fn empty_source_list_produces_zero_results_without_crashing() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::stdout_only();
    let mut store = SeenStore::load(&dir.path().join("seen.json"), &logger);

    let properties =
        pipeline::search_all_sources(&[], &demo_criteria(), &mut store, &logger);
    assert!(properties.is_empty());

    let articles = pipeline::scrape_all_article_sources(&[], &mut store, &logger);
    assert!(articles.is_empty());
}
