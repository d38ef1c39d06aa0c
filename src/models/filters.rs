use super::tool::{Category, PricingModel};

/// Preset minimum-rating thresholds offered by the filter panel.
pub const RATING_OPTIONS: [(f64, &str); 4] = [
    (0.0, "Any Rating"),
    (3.0, "3+ Stars"),
    (4.0, "4+ Stars"),
    (4.5, "4.5+ Stars"),
];

/// Current catalog filter selection. Transient, view-only state; never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub category: Option<Category>,
    pub pricing: Option<PricingModel>,
    pub min_rating: f64,
}

impl Filters {
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.pricing.is_some() || self.min_rating > 0.0
    }

    /// Query parameters for `GET /tools`. Unset filters are omitted entirely,
    /// including a zero minimum rating.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.label().to_owned()));
        }
        if let Some(pricing) = self.pricing {
            params.push(("pricing", pricing.label().to_owned()));
        }
        if self.min_rating > 0.0 {
            params.push(("min_rating", self.min_rating.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_build_an_empty_query() {
        let filters = Filters::default();
        assert!(!filters.is_active());
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn set_filters_appear_in_the_query() {
        let filters = Filters {
            category: Some(Category::Nlp),
            pricing: Some(PricingModel::Paid),
            min_rating: 4.5,
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("category", "NLP".to_owned()),
                ("pricing", "Paid".to_owned()),
                ("min_rating", "4.5".to_owned()),
            ]
        );
    }

    #[test]
    fn zero_min_rating_is_omitted() {
        let filters = Filters {
            category: None,
            pricing: Some(PricingModel::Free),
            min_rating: 0.0,
        };
        assert_eq!(filters.to_query(), vec![("pricing", "Free".to_owned())]);
        assert!(filters.is_active());
    }
}
