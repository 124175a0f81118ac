//! Generic blog/news scraper for article sources.
//!
//! Tries common article container selectors first; when a site uses none of
//! them, falls back to scanning content links that look like headlines.
//! Selector guessing is inherently site-specific and fragile, so everything
//! here is best-effort: an item that cannot be parsed is skipped, never an
//! error.

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::logger::Logger;
use crate::scrapers::client;
use crate::types::{Article, Source};

const MAX_ARTICLES: usize = 15;
const MAX_FALLBACK_LINKS: usize = 20;
const MIN_HEADLINE_LEN: usize = 15;

const ARTICLE_SELECTORS: &[&str] = &[
    "article",
    ".post",
    ".entry",
    ".blog-post",
    ".news-item",
    ".article",
    "[class*=\"post\"]",
    "[class*=\"article\"]",
];

const NAV_KEYWORDS: &[&str] = &[
    "home", "about", "contact", "privacy", "terms", "menu", "login", "register",
];

pub fn scrape(source: &Source, logger: &Logger) -> Result<Vec<Article>> {
    logger.info(&format!("Scraping: {}...", source.name));

    let response = client(10)?.get(&source.url).send()?;
    let response = response.error_for_status()?;
    let html = response.text()?;

    Ok(parse_article_page(&html, source))
}

pub(crate) fn parse_article_page(html: &str, source: &Source) -> Vec<Article> {
    let document = Html::parse_document(html);

    for selector_str in ARTICLE_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        let articles: Vec<Article> = document
            .select(&selector)
            .take(MAX_ARTICLES)
            .filter_map(|elem| parse_article_element(elem, source))
            .collect();

        if !articles.is_empty() {
            return articles;
        }
    }

    // No recognizable article containers; scan links for headline-like text.
    scan_content_links(&document, source)
}

fn parse_article_element(elem: ElementRef<'_>, source: &Source) -> Option<Article> {
    let title_selector = Selector::parse("h1, h2, h3, h4, a").ok()?;
    let title_elem = elem.select(&title_selector).next()?;
    let title = collapse_text(title_elem);
    if title.is_empty() {
        return None;
    }

    let link_selector = Selector::parse("a[href]").ok()?;
    let href = elem
        .select(&link_selector)
        .next()
        .and_then(|a| a.value().attr("href"))?;
    let url = absolutize(&source.url, href)?;

    let date_selector = Selector::parse("time, [class*=\"date\"]").ok()?;
    let date = elem
        .select(&date_selector)
        .next()
        .map(collapse_text)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    Some(Article {
        title,
        url,
        source: source.name.clone(),
        date,
    })
}

fn scan_content_links(document: &Html, source: &Source) -> Vec<Article> {
    let (main_selector, any_selector) = match (
        Selector::parse("main a[href], [class*=\"content\"] a[href]"),
        Selector::parse("a[href]"),
    ) {
        (Ok(main), Ok(any)) => (main, any),
        _ => return Vec::new(),
    };

    let links: Vec<ElementRef<'_>> = {
        let scoped: Vec<_> = document.select(&main_selector).collect();
        if scoped.is_empty() {
            document.select(&any_selector).collect()
        } else {
            scoped
        }
    };

    links
        .into_iter()
        .take(MAX_FALLBACK_LINKS)
        .filter_map(|link| {
            let text = collapse_text(link);
            if text.len() < MIN_HEADLINE_LEN {
                return None;
            }
            let lower = text.to_lowercase();
            if NAV_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
                return None;
            }

            let href = link.value().attr("href")?;
            let url = absolutize(&source.url, href)?;

            Some(Article {
                title: text,
                url,
                source: source.name.clone(),
                date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            })
        })
        .collect()
}

/// Resolve a possibly relative href against the source page URL. Anchors,
/// javascript: links and unparsable URLs are dropped.
fn absolutize(base: &str, href: &str) -> Option<String> {
    if href.starts_with('#') || href.starts_with("javascript:") || href.starts_with("mailto:") {
        return None;
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    let base = Url::parse(base).ok()?;
    base.join(href).ok().map(|u| u.to_string())
}

fn collapse_text(elem: ElementRef<'_>) -> String {
    elem.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
