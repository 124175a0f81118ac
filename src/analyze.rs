//! Property Analysis
//!
//! Weighted scoring heuristic for listed properties:
//! - price per square foot tiers
//! - investment metrics (cap rate, 1% rule) when investment_focus is set
//! - neighborhood / property-age preferences otherwise
//! - common adjustments (auction source, HOA level, extra bedrooms)

use chrono::Datelike;

use crate::types::{Property, ScoredProperty, SearchCriteria};

/// Estimated achievable rent per square foot per month in the Fort
/// Lauderdale market.
const RENT_PER_SQFT: f64 = 1.75;

/// Share of gross rent left after tax, insurance and maintenance.
const NOI_FACTOR: f64 = 0.70;

/// Score a property against the criteria and wrap it with the result.
pub fn analyze_property(prop: &Property, criteria: &SearchCriteria) -> ScoredProperty {
    score_for_year(prop, criteria, chrono::Local::now().year())
}

/// Deterministic scoring core. The current year is a parameter so the age
/// check can be tested without depending on the wall clock.
pub fn score_for_year(
    prop: &Property,
    criteria: &SearchCriteria,
    current_year: i32,
) -> ScoredProperty {
    let mut score = 0.0;
    let mut reasons: Vec<String> = Vec::new();

    // Price analysis. Fort Lauderdale average runs around $300-400/sqft.
    let price_per_sqft = if prop.sqft > 0 {
        prop.price / prop.sqft as f64
    } else {
        0.0
    };

    if price_per_sqft < 250.0 {
        score += 25.0;
        reasons.push(format!("Excellent price/sqft: ${:.0}", price_per_sqft));
    } else if price_per_sqft < 350.0 {
        score += 15.0;
        reasons.push(format!("Good price/sqft: ${:.0}", price_per_sqft));
    } else if price_per_sqft < 450.0 {
        score += 5.0;
        reasons.push(format!("Fair price/sqft: ${:.0}", price_per_sqft));
    }

    if criteria.investment_focus {
        let estimated_rent = prop.sqft as f64 * RENT_PER_SQFT;
        let annual_rent = estimated_rent * 12.0;
        let net_operating_income = annual_rent * NOI_FACTOR - prop.hoa_fees * 12.0;
        let cap_rate = if prop.price > 0.0 {
            net_operating_income / prop.price * 100.0
        } else {
            0.0
        };

        if cap_rate > 8.0 {
            score += 25.0;
            reasons.push(format!("Excellent cap rate: {:.1}%", cap_rate));
        } else if cap_rate > 6.0 {
            score += 15.0;
            reasons.push(format!("Good cap rate: {:.1}%", cap_rate));
        } else if cap_rate > 4.0 {
            score += 5.0;
            reasons.push(format!("Fair cap rate: {:.1}%", cap_rate));
        }

        // 1% rule: monthly rent should be at least 1% of purchase price.
        if estimated_rent >= prop.price * 0.01 {
            score += 15.0;
            reasons.push("Meets 1% rule for cash flow".to_string());
        }
    } else {
        let neighborhood = prop.neighborhood.to_lowercase();
        if criteria
            .preferred_neighborhoods
            .iter()
            .any(|hood| neighborhood.contains(&hood.to_lowercase()))
        {
            score += 20.0;
            reasons.push("In preferred neighborhood".to_string());
        }

        // Unknown build year is treated as old.
        let age = if prop.year_built > 0 {
            current_year - prop.year_built
        } else {
            100
        };
        if age < criteria.max_age_years as i32 {
            score += 15.0;
            reasons.push(format!("Property age ({} years) meets requirements", age));
        }
    }

    // Auction properties often sell below market.
    if prop.source.to_lowercase().contains("auction") {
        score += 10.0;
        reasons.push("Auction property - potential for below-market price".to_string());
    }

    if prop.hoa_fees < 200.0 {
        score += 10.0;
        reasons.push(format!("Low HOA fees: ${:.0}/month", prop.hoa_fees));
    } else if prop.hoa_fees > 500.0 {
        score -= 5.0;
        reasons.push(format!("High HOA fees: ${:.0}/month", prop.hoa_fees));
    }

    if prop.bedrooms >= criteria.min_bedrooms + 1 {
        score += 5.0;
        reasons.push("Extra bedrooms".to_string());
    }

    let recommendation = recommendation_for(score, &reasons);

    ScoredProperty {
        property: prop.clone(),
        score,
        reasons,
        recommendation,
        is_new: true,
    }
}

fn recommendation_for(score: f64, reasons: &[String]) -> String {
    let band = if score >= 50.0 {
        "EXCELLENT OPPORTUNITY"
    } else if score >= 35.0 {
        "GOOD OPPORTUNITY"
    } else if score >= 20.0 {
        "Consider"
    } else {
        "Review carefully"
    };
    format!("{} - {}", band, reasons.join("; "))
}

/// Sort analyzed properties by score, best first.
pub fn sort_by_score(properties: &mut [ScoredProperty]) {
    properties.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investment_criteria() -> SearchCriteria {
        SearchCriteria {
            max_budget: 500_000.0,
            min_budget: 250_000.0,
            min_bedrooms: 3,
            min_bathrooms: 2.0,
            preferred_neighborhoods: vec!["Las Olas".to_string()],
            property_types: vec![],
            investment_focus: true,
            max_age_years: 50,
            min_sqft: 0,
            max_hoa: 0.0,
            email: "test@example.com".to_string(),
        }
    }

    fn sample_property() -> Property {
        Property {
            address: "123 Las Olas Blvd, Fort Lauderdale, FL 33301".to_string(),
            price: 450_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft: 1800,
            year_built: 2005,
            property_type: "single-family".to_string(),
            source: "Sample Data".to_string(),
            url: "https://example.com/1".to_string(),
            neighborhood: "Las Olas".to_string(),
            hoa_fees: 200.0,
            description: String::new(),
            listing_date: "2026-08-29".to_string(),
        }
    }

    #[test]
    fn test_worked_investment_example() {
        // price/sqft = 250 -> +15 tier (not < 250)
        // rent = 3150/mo, NOI = 23940, cap rate ~5.32% -> +5 tier
        // 1% rule: 3150 >= 4500 fails
        // HOA 200 sits in the neutral band
        // bedrooms 3 is not min+1
        let scored = score_for_year(&sample_property(), &investment_criteria(), 2026);
        assert_eq!(scored.score, 20.0);
        assert!(scored.recommendation.starts_with("Consider - "));
        assert!(scored.reasons.iter().any(|r| r.contains("Good price/sqft")));
        assert!(scored.reasons.iter().any(|r| r.contains("Fair cap rate: 5.3%")));
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let prop = sample_property();
        let criteria = investment_criteria();
        let a = score_for_year(&prop, &criteria, 2026);
        let b = score_for_year(&prop, &criteria, 2026);
        assert_eq!(a.score, b.score);
        assert_eq!(a.recommendation, b.recommendation);
        assert_eq!(a.reasons, b.reasons);
    }

    #[test]
    fn test_residence_scoring_uses_neighborhood_and_age() {
        let mut criteria = investment_criteria();
        criteria.investment_focus = false;

        let scored = score_for_year(&sample_property(), &criteria, 2026);
        // 15 (price/sqft) + 20 (neighborhood) + 15 (age 21 < 50) = 50
        assert_eq!(scored.score, 50.0);
        assert!(scored
            .recommendation
            .starts_with("EXCELLENT OPPORTUNITY - "));
        assert!(scored
            .reasons
            .iter()
            .any(|r| r == "In preferred neighborhood"));
    }

    #[test]
    fn test_unknown_year_built_fails_age_check() {
        let mut criteria = investment_criteria();
        criteria.investment_focus = false;
        criteria.preferred_neighborhoods = vec![];

        let mut prop = sample_property();
        prop.year_built = 0;
        let scored = score_for_year(&prop, &criteria, 2026);
        assert!(!scored
            .reasons
            .iter()
            .any(|r| r.contains("Property age")));
    }

    #[test]
    fn test_neighborhood_match_is_case_insensitive_substring() {
        let mut criteria = investment_criteria();
        criteria.investment_focus = false;
        criteria.preferred_neighborhoods = vec!["las olas".to_string()];

        let mut prop = sample_property();
        prop.neighborhood = "East Las Olas Isles".to_string();
        let scored = score_for_year(&prop, &criteria, 2026);
        assert!(scored
            .reasons
            .iter()
            .any(|r| r == "In preferred neighborhood"));
    }

    #[test]
    fn test_auction_source_bonus() {
        let mut prop = sample_property();
        prop.source = "Real Broward County Auction".to_string();
        let scored = score_for_year(&prop, &investment_criteria(), 2026);
        assert!(scored
            .reasons
            .iter()
            .any(|r| r.contains("Auction property")));
    }

    #[test]
    fn test_hoa_bands() {
        let criteria = investment_criteria();

        let mut prop = sample_property();
        prop.hoa_fees = 150.0;
        let low = score_for_year(&prop, &criteria, 2026);
        assert!(low.reasons.iter().any(|r| r.contains("Low HOA fees")));

        prop.hoa_fees = 600.0;
        let high = score_for_year(&prop, &criteria, 2026);
        assert!(high.reasons.iter().any(|r| r.contains("High HOA fees")));

        // 200-500 inclusive gets neither bonus nor penalty.
        prop.hoa_fees = 500.0;
        let neutral = score_for_year(&prop, &criteria, 2026);
        assert!(!neutral.reasons.iter().any(|r| r.contains("HOA fees")));
    }

    #[test]
    fn test_zero_sqft_lands_in_best_price_tier() {
        // Unknown square footage gives price/sqft = 0, which falls in the
        // < 250 tier and earns the full bonus.
        let mut prop = sample_property();
        prop.sqft = 0;
        let scored = score_for_year(&prop, &investment_criteria(), 2026);
        assert!(scored
            .reasons
            .iter()
            .any(|r| r == "Excellent price/sqft: $0"));

        // Zero rent sinks every investment metric, HOA 200 is neutral and
        // bedrooms match the minimum exactly, so the tier bonus stands alone.
        assert_eq!(scored.score, 25.0);
    }

    #[test]
    fn test_sort_by_score_descending() {
        let criteria = investment_criteria();
        let mut cheap = sample_property();
        cheap.price = 275_000.0;
        cheap.bedrooms = 4;

        let mut scored = vec![
            score_for_year(&sample_property(), &criteria, 2026),
            score_for_year(&cheap, &criteria, 2026),
        ];
        sort_by_score(&mut scored);
        assert!(scored[0].score >= scored[1].score);
        assert_eq!(scored[0].property.price, 275_000.0);
    }
}
