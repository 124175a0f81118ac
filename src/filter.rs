use crate::types::{Property, SearchCriteria};

/// Check whether a property satisfies every search criterion.
///
/// All conditions are conjunctive. A zero minimum square footage, a zero
/// maximum HOA, or an empty property-type list means "unconstrained" for
/// that dimension.
pub fn matches_criteria(prop: &Property, criteria: &SearchCriteria) -> bool {
    if prop.price < criteria.min_budget || prop.price > criteria.max_budget {
        return false;
    }

    if prop.bedrooms < criteria.min_bedrooms {
        return false;
    }

    if prop.bathrooms < criteria.min_bathrooms {
        return false;
    }

    if criteria.min_sqft > 0 && prop.sqft < criteria.min_sqft {
        return false;
    }

    if criteria.max_hoa > 0.0 && prop.hoa_fees > criteria.max_hoa {
        return false;
    }

    if !criteria.property_types.is_empty()
        && !criteria.property_types.contains(&prop.property_type)
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_criteria() -> SearchCriteria {
        SearchCriteria {
            max_budget: 500_000.0,
            min_budget: 250_000.0,
            min_bedrooms: 3,
            min_bathrooms: 2.0,
            preferred_neighborhoods: vec![],
            property_types: vec!["single-family".to_string(), "condo".to_string()],
            investment_focus: false,
            max_age_years: 50,
            min_sqft: 1400,
            max_hoa: 400.0,
            email: "test@example.com".to_string(),
        }
    }

    fn base_property() -> Property {
        Property {
            address: "123 Las Olas Blvd, Fort Lauderdale, FL 33301".to_string(),
            price: 450_000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft: 1800,
            year_built: 2005,
            property_type: "single-family".to_string(),
            source: "Test".to_string(),
            url: "https://example.com/1".to_string(),
            neighborhood: "Las Olas".to_string(),
            hoa_fees: 200.0,
            description: String::new(),
            listing_date: "2026-08-29".to_string(),
        }
    }

    #[test]
    fn test_matching_property_passes() {
        assert!(matches_criteria(&base_property(), &base_criteria()));
    }

    #[test]
    fn test_budget_boundaries() {
        let criteria = base_criteria();

        let mut prop = base_property();
        prop.price = 250_000.0;
        assert!(matches_criteria(&prop, &criteria), "min budget is inclusive");
        prop.price = 500_000.0;
        assert!(matches_criteria(&prop, &criteria), "max budget is inclusive");
        prop.price = 249_999.0;
        assert!(!matches_criteria(&prop, &criteria));
        prop.price = 500_001.0;
        assert!(!matches_criteria(&prop, &criteria));
    }

    #[test]
    fn test_bedroom_and_bathroom_minimums() {
        let criteria = base_criteria();

        let mut prop = base_property();
        prop.bedrooms = 2;
        assert!(!matches_criteria(&prop, &criteria));

        let mut prop = base_property();
        prop.bathrooms = 1.5;
        assert!(!matches_criteria(&prop, &criteria));
        prop.bathrooms = 2.0;
        assert!(matches_criteria(&prop, &criteria), "minimum is inclusive");
    }

    #[test]
    fn test_sqft_threshold() {
        let criteria = base_criteria();
        let mut prop = base_property();
        prop.sqft = 1399;
        assert!(!matches_criteria(&prop, &criteria));
        prop.sqft = 1400;
        assert!(matches_criteria(&prop, &criteria));
    }

    #[test]
    fn test_hoa_threshold() {
        let criteria = base_criteria();
        let mut prop = base_property();
        prop.hoa_fees = 400.0;
        assert!(matches_criteria(&prop, &criteria), "max HOA is inclusive");
        prop.hoa_fees = 400.01;
        assert!(!matches_criteria(&prop, &criteria));
    }

    #[test]
    fn test_property_type_membership() {
        let criteria = base_criteria();
        let mut prop = base_property();
        prop.property_type = "townhouse".to_string();
        assert!(!matches_criteria(&prop, &criteria));
    }

    #[test]
    fn test_zero_thresholds_are_unconstrained() {
        // Empty property_types, min_sqft = 0, max_hoa = 0 must reject nothing
        // on those dimensions.
        let mut criteria = base_criteria();
        criteria.property_types = vec![];
        criteria.min_sqft = 0;
        criteria.max_hoa = 0.0;

        let mut prop = base_property();
        prop.property_type = "houseboat".to_string();
        prop.sqft = 0;
        prop.hoa_fees = 9_999.0;
        assert!(matches_criteria(&prop, &criteria));
    }
}
