//! Report rendering.
//!
//! Self-contained HTML documents with inline CSS, plus plain-text
//! alternatives for the email multipart. When email is unavailable the
//! same HTML is written to a timestamped local file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::dedup::identity;
use crate::logger::Logger;
use crate::types::{Article, ScoredProperty, SearchCriteria};

const MAX_REPORTED_PROPERTIES: usize = 20;

/// HTML report for the property search, top properties first.
pub fn property_report_html(properties: &[ScoredProperty], criteria: &SearchCriteria) -> String {
    let mut html = format!(
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; }}
    .header {{ background-color: #2c3e50; color: white; padding: 20px; }}
    .property {{ border: 1px solid #ddd; margin: 20px; padding: 15px; }}
    .excellent {{ border-left: 5px solid #27ae60; }}
    .good {{ border-left: 5px solid #3498db; }}
    .price {{ font-size: 24px; font-weight: bold; color: #27ae60; }}
    .address {{ font-size: 18px; color: #2c3e50; }}
    .details {{ margin: 10px 0; }}
    .recommendation {{ background-color: #ecf0f1; padding: 10px; margin: 10px 0; }}
    .score {{ font-weight: bold; color: #e74c3c; }}
    .badge {{ background-color: #27ae60; color: white; padding: 2px 8px; font-size: 12px; }}
</style>
</head>
<body>
<div class="header">
    <h1>Fort Lauderdale Real Estate Search Results</h1>
    <p>Date: {date}</p>
    <p>Found {count} properties matching your criteria</p>
</div>
"#,
        date = chrono::Local::now().format("%B %d, %Y"),
        count = properties.len()
    );

    for scored in properties.iter().take(MAX_REPORTED_PROPERTIES) {
        let prop = &scored.property;
        let css_class = if scored.score >= 50.0 {
            "excellent"
        } else if scored.score >= 35.0 {
            "good"
        } else {
            ""
        };
        let badge = if scored.is_new {
            r#" <span class="badge">NEW</span>"#
        } else {
            ""
        };
        let year_built = if prop.year_built > 0 {
            prop.year_built.to_string()
        } else {
            "N/A".to_string()
        };

        html.push_str(&format!(
            r#"<div class="property {css_class}">
    <div class="address">{address}{badge}</div>
    <div class="price">${price:.0}</div>
    <div class="details">
        <strong>{bedrooms} bed</strong> |
        <strong>{bathrooms} bath</strong> |
        <strong>{sqft} sqft</strong> |
        Built: {year_built}
    </div>
    <div class="details">
        Type: {property_type} |
        HOA: ${hoa:.0}/mo |
        Source: {source}
    </div>
    <div class="details">
        Neighborhood: {neighborhood}
    </div>
    <div class="recommendation">
        <div class="score">Score: {score:.0}/100</div>
        {recommendation}
    </div>
    <div>
        <a href="{url}">View Listing</a>
    </div>
</div>
"#,
            css_class = css_class,
            address = prop.address,
            badge = badge,
            price = prop.price,
            bedrooms = prop.bedrooms,
            bathrooms = prop.bathrooms,
            sqft = prop.sqft,
            year_built = year_built,
            property_type = prop.property_type,
            hoa = prop.hoa_fees,
            source = prop.source,
            neighborhood = prop.neighborhood,
            score = scored.score,
            recommendation = scored.recommendation,
            url = prop.url,
        ));
    }

    html.push_str(&format!(
        r#"<div style="margin: 20px; padding: 15px; background-color: #ecf0f1;">
    <h3>Search Criteria Used:</h3>
    <p>Budget: ${min_budget:.0} - ${max_budget:.0}</p>
    <p>Bedrooms: {min_bedrooms} min | Bathrooms: {min_bathrooms} min</p>
    <p>Square Feet: {min_sqft} min</p>
    <p>Focus: {focus}</p>
</div>
</body>
</html>
"#,
        min_budget = criteria.min_budget,
        max_budget = criteria.max_budget,
        min_bedrooms = criteria.min_bedrooms,
        min_bathrooms = criteria.min_bathrooms,
        min_sqft = criteria.min_sqft,
        focus = if criteria.investment_focus {
            "Investment Property"
        } else {
            "Personal Residence"
        },
    ));

    html
}

/// Plain-text alternative for the property email.
pub fn property_report_text(properties: &[ScoredProperty]) -> String {
    let mut text = format!(
        "Fort Lauderdale House Search Results\n\nFound {} matching properties:\n\n",
        properties.len()
    );

    for (i, scored) in properties.iter().take(MAX_REPORTED_PROPERTIES).enumerate() {
        let prop = &scored.property;
        text.push_str(&format!(
            "{}. {}\n   ${:.0} | {}bd {}ba | {} sqft\n   Score: {:.0}/100\n   {}\n\n",
            i + 1,
            prop.address,
            prop.price,
            prop.bedrooms,
            prop.bathrooms,
            prop.sqft,
            scored.score,
            scored.recommendation,
        ));
    }

    text
}

/// HTML digest for new articles, grouped by source in encounter order, with
/// mailto feedback links carrying liked/disliked intent.
pub fn article_digest_html(articles: &[Article], recipient_email: &str) -> String {
    let source_count = {
        let mut seen: Vec<&str> = Vec::new();
        for a in articles {
            if !seen.contains(&a.source.as_str()) {
                seen.push(&a.source);
            }
        }
        seen.len()
    };

    let mut html = format!(
        r#"<html>
<head>
<style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .header {{ background-color: #4CAF50; color: white; padding: 20px; text-align: center; }}
    .article {{ border-left: 4px solid #4CAF50; padding: 15px; margin: 20px 0; background-color: #f9f9f9; }}
    .article h3 {{ margin-top: 0; color: #2c3e50; }}
    .article a {{ color: #3498db; text-decoration: none; }}
    .source {{ color: #7f8c8d; font-size: 0.9em; }}
    .date {{ color: #95a5a6; font-size: 0.85em; }}
    .feedback {{ margin-top: 10px; padding: 10px; background-color: #ecf0f1; border-radius: 5px; }}
    .feedback-link {{ display: inline-block; margin: 5px 10px 5px 0; padding: 8px 15px; background-color: #3498db; color: white; text-decoration: none; border-radius: 3px; font-size: 0.9em; }}
    .feedback-link.dislike {{ background-color: #e74c3c; }}
    .footer {{ margin-top: 30px; padding: 20px; background-color: #34495e; color: white; }}
    .summary {{ padding: 15px; background-color: #e8f5e9; margin: 20px 0; border-radius: 5px; }}
</style>
</head>
<body>
<div class="header">
    <h1>Escape Room Industry News Update</h1>
    <p>Your latest escape room industry news digest</p>
</div>

<div class="summary">
    <strong>Summary:</strong> Found {count} new article(s) from {sources} source(s)
    <br><strong>Date:</strong> {date}
</div>
"#,
        count = articles.len(),
        sources = source_count,
        date = chrono::Local::now().format("%B %d, %Y"),
    );

    // Group by source, preserving encounter order within and across groups.
    let mut grouped: Vec<(&str, Vec<&Article>)> = Vec::new();
    for article in articles {
        match grouped.iter_mut().find(|(s, _)| *s == article.source) {
            Some((_, list)) => list.push(article),
            None => grouped.push((&article.source, vec![article])),
        }
    }

    for (source, source_articles) in grouped {
        html.push_str(&format!(
            r#"<h2 style="color: #2c3e50; border-bottom: 2px solid #4CAF50; padding-bottom: 10px;">{}</h2>"#,
            source
        ));

        for article in source_articles {
            let article_id = identity(&article.title, &article.url);
            html.push_str(&format!(
                r#"<div class="article">
    <h3><a href="{url}" target="_blank">{title}</a></h3>
    <div class="source">Source: {source}</div>
    <div class="date">Date: {date}</div>
    <div class="feedback">
        <strong>Was this article useful?</strong><br>
        <a href="{liked}" class="feedback-link">Yes, I liked it</a>
        <a href="{disliked}" class="feedback-link dislike">Not relevant</a>
    </div>
</div>
"#,
                url = article.url,
                title = article.title,
                source = article.source,
                date = article.date,
                liked = feedback_mailto(recipient_email, article, &article_id, "liked"),
                disliked = feedback_mailto(recipient_email, article, &article_id, "disliked"),
            ));
        }
    }

    html.push_str(&format!(
        r#"<div class="footer">
    <h2>Your Feedback Matters</h2>
    <p><a href="mailto:{email}?subject={subject}" style="color: #3498db;">Send us your thoughts and suggestions</a></p>
    <p style="font-size: 0.9em; color: #bdc3c7;">
        You're receiving this because you subscribed to Escape Room Industry News updates.
    </p>
</div>
</body>
</html>
"#,
        email = recipient_email,
        subject = urlencoding::encode("News Scraper Feedback"),
    ));

    html
}

/// Plain-text alternative for the article digest email.
pub fn article_digest_text(articles: &[Article]) -> String {
    let mut text = format!(
        "Escape Room Industry News Update\n\nFound {} new articles:\n\n",
        articles.len()
    );

    for article in articles {
        text.push_str(&format!(
            "Title: {}\nSource: {}\nURL: {}\nDate: {}\n\n",
            article.title, article.source, article.url, article.date
        ));
    }

    text.push_str("\nTo provide feedback, reply to this email.\n");
    text
}

/// Build a mailto link whose subject and body carry the feedback intent
/// ("liked"/"disliked"), the article reference and its identity hash.
fn feedback_mailto(recipient: &str, article: &Article, article_id: &str, intent: &str) -> String {
    let subject = match intent {
        "liked" => "Feedback: Liked Article".to_string(),
        _ => "Feedback: Disliked Article".to_string(),
    };
    let body = format!(
        "Feedback: {}\n{}\n{}\n\nArticle ID: {}",
        intent, article.title, article.url, article_id
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// Write a report to a timestamped HTML file under the working root and
/// return its path.
pub fn save_report_to_file(root: &str, prefix: &str, html: &str, logger: &Logger) -> Result<PathBuf> {
    let filename = format!(
        "{}_{}.html",
        prefix,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = PathBuf::from(root).join(filename);
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write report to {:?}", path))?;
    logger.info(&format!("Report saved to {:?}", path));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::score_for_year;
    use crate::scrapers::sample_properties;
    use crate::types::SearchCriteria;

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            max_budget: 500_000.0,
            min_budget: 250_000.0,
            min_bedrooms: 3,
            min_bathrooms: 2.0,
            preferred_neighborhoods: vec![],
            property_types: vec![],
            investment_focus: true,
            max_age_years: 50,
            min_sqft: 0,
            max_hoa: 0.0,
            email: "me@example.com".to_string(),
        }
    }

    fn articles() -> Vec<Article> {
        vec![
            Article {
                title: "Escape room openings hit record".to_string(),
                url: "https://example.com/a".to_string(),
                source: "Escape Room Tips".to_string(),
                date: "2026-08-20".to_string(),
            },
            Article {
                title: "Design deep dive & interview".to_string(),
                url: "https://example.com/b".to_string(),
                source: "Room Escape Artist".to_string(),
                date: "2026-08-21".to_string(),
            },
        ]
    }

    #[test]
    fn test_property_report_contains_items_and_criteria() {
        let criteria = criteria();
        let scored: Vec<_> = sample_properties()
            .iter()
            .map(|p| score_for_year(p, &criteria, 2026))
            .collect();

        let html = property_report_html(&scored, &criteria);
        assert!(html.contains("123 Las Olas Blvd"));
        assert!(html.contains("Search Criteria Used:"));
        assert!(html.contains("Investment Property"));
        assert!(html.contains("Score:"));
    }

    #[test]
    fn test_article_digest_groups_and_links_feedback() {
        let html = article_digest_html(&articles(), "me@example.com");
        assert!(html.contains("Escape Room Tips"));
        assert!(html.contains("Room Escape Artist"));
        assert!(html.contains("mailto:me@example.com?subject=Feedback%3A%20Liked%20Article"));
        assert!(html.contains("Feedback%3A%20Disliked%20Article"));
        // Identity hash of the first article is embedded in the body param.
        let id = identity("Escape room openings hit record", "https://example.com/a");
        assert!(html.contains(&id));
    }

    #[test]
    fn test_feedback_mailto_encodes_special_characters() {
        let article = Article {
            title: "Q&A: puzzles + tech".to_string(),
            url: "https://example.com/qa?x=1".to_string(),
            source: "Tips".to_string(),
            date: "2026-08-20".to_string(),
        };
        let link = feedback_mailto("me@example.com", &article, "abc123", "liked");
        assert!(!link.contains("Q&A"), "ampersand must be percent-encoded");
        assert!(link.contains("abc123"));
        assert!(link.starts_with("mailto:me@example.com?subject="));
    }

    #[test]
    fn test_save_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_report_to_file(
            dir.path().to_str().unwrap(),
            "house_search_report",
            "<html></html>",
            &Logger::stdout_only(),
        )
        .unwrap();
        assert!(path.exists());
        assert!(path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("house_search_report_"));
    }
}
