//! Interactive criteria collection.
//!
//! Numeric prompts loop until a parseable, range-valid value is entered;
//! invalid input never propagates out of this module. Currency inputs
//! tolerate `$` and thousands separators.

use std::io::{self, Write};

use crate::types::SearchCriteria;

/// Strip currency decoration and parse a number ("$450,000" -> 450000.0).
pub fn parse_money(input: &str) -> Option<f64> {
    let cleaned = input.trim().replace(['$', ','], "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Split comma-separated input into trimmed, non-empty items.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn prompt_money(prompt: &str) -> f64 {
    loop {
        if let Some(value) = parse_money(&read_line(prompt)) {
            return value;
        }
        println!("Please enter a valid number");
    }
}

fn prompt_u32(prompt: &str) -> u32 {
    loop {
        if let Ok(value) = read_line(prompt).replace(',', "").parse() {
            return value;
        }
        println!("Please enter a valid number");
    }
}

fn prompt_f64(prompt: &str) -> f64 {
    loop {
        if let Ok(value) = read_line(prompt).parse() {
            return value;
        }
        println!("Please enter a valid number");
    }
}

pub fn prompt_yes_no(prompt: &str) -> bool {
    read_line(prompt).to_lowercase().starts_with('y')
}

/// Walk the user through every criteria field.
pub fn collect_criteria() -> SearchCriteria {
    println!();
    println!("{}", "=".repeat(60));
    println!("FORT LAUDERDALE REAL ESTATE SEARCH & ANALYSIS");
    println!("{}", "=".repeat(60));
    println!();
    println!("Let's set up your search criteria...");
    println!();

    let (min_budget, max_budget) = loop {
        let min = prompt_money("Minimum budget ($): ");
        let max = prompt_money("Maximum budget ($): ");
        if min < max {
            break (min, max);
        }
        println!("Maximum budget must be greater than minimum!");
    };

    let min_bedrooms = prompt_u32("Minimum bedrooms: ");
    let min_bathrooms = prompt_f64("Minimum bathrooms: ");
    let min_sqft = prompt_u32("Minimum square feet (0 for any): ");

    println!();
    println!("Property types (enter comma-separated):");
    println!("Options: single-family, condo, townhouse, multi-family");
    let property_types = parse_list(&read_line("Property types (or press Enter for all): "));

    println!();
    println!("Preferred neighborhoods in Fort Lauderdale (comma-separated):");
    println!("Examples: Las Olas, Victoria Park, Sailboat Bend, Coral Ridge, Rio Vista");
    let neighborhoods = parse_list(&read_line("Neighborhoods (or press Enter for all): "));

    let max_hoa = prompt_money("Maximum monthly HOA fees (0 for any): ");
    let max_age_years = prompt_u32("Maximum property age in years (0 for any): ");

    println!();
    let investment_focus = read_line("Primary focus - Investment or Personal? (i/p): ")
        .to_lowercase()
        .starts_with('i');

    println!();
    let email = read_line("Your email address for reports: ");

    SearchCriteria {
        max_budget,
        min_budget,
        min_bedrooms,
        min_bathrooms,
        preferred_neighborhoods: neighborhoods,
        property_types,
        investment_focus,
        max_age_years,
        min_sqft,
        max_hoa,
        email,
    }
}
