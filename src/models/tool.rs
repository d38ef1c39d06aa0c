use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of tool categories understood by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "NLP")]
    Nlp,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Dev Tools")]
    DevTools,
    #[serde(rename = "Audio")]
    Audio,
    #[serde(rename = "Video")]
    Video,
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Nlp,
        Category::ComputerVision,
        Category::DevTools,
        Category::Audio,
        Category::Video,
        Category::DataAnalytics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Nlp => "NLP",
            Category::ComputerVision => "Computer Vision",
            Category::DevTools => "Dev Tools",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::DataAnalytics => "Data Analytics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter().find(|c| c.label() == s).ok_or(())
    }
}

/// Closed set of pricing models understood by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingModel {
    #[serde(rename = "Free")]
    Free,
    #[serde(rename = "Paid")]
    Paid,
    #[serde(rename = "Subscription")]
    Subscription,
}

impl PricingModel {
    pub const ALL: [PricingModel; 3] = [
        PricingModel::Free,
        PricingModel::Paid,
        PricingModel::Subscription,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PricingModel::Free => "Free",
            PricingModel::Paid => "Paid",
            PricingModel::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PricingModel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PricingModel::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or(())
    }
}

/// A catalog entry as returned by the backend. `average_rating` and
/// `review_count` are derived server-side from approved reviews and are
/// read-only here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub use_case: String,
    pub category: Category,
    pub pricing_model: PricingModel,
    pub average_rating: f64,
    pub review_count: u32,
}

/// Body for tool create/update calls.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ToolPayload {
    pub name: String,
    pub use_case: String,
    pub category: Category,
    pub pricing_model: PricingModel,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFormError {
    #[error("Name is required")]
    MissingName,
    #[error("Category is required")]
    MissingCategory,
    #[error("Pricing model is required")]
    MissingPricing,
}

/// Raw form state for the add/edit tool modal. Select inputs hand us strings,
/// so the draft holds strings and `validate` does the conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDraft {
    pub name: String,
    pub use_case: String,
    pub category: String,
    pub pricing_model: String,
}

impl ToolDraft {
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            name: tool.name.clone(),
            use_case: tool.use_case.clone(),
            category: tool.category.label().to_owned(),
            pricing_model: tool.pricing_model.label().to_owned(),
        }
    }

    /// Required-field check, performed before any request is built. Name,
    /// category and pricing model must all be present; use case may be empty.
    pub fn validate(&self) -> Result<ToolPayload, ToolFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ToolFormError::MissingName);
        }
        let category =
            Category::from_str(&self.category).map_err(|_| ToolFormError::MissingCategory)?;
        let pricing_model = PricingModel::from_str(&self.pricing_model)
            .map_err(|_| ToolFormError::MissingPricing)?;
        Ok(ToolPayload {
            name: name.to_owned(),
            use_case: self.use_case.trim().to_owned(),
            category,
            pricing_model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ToolDraft {
        ToolDraft {
            name: "Whisper".into(),
            use_case: "Speech to text".into(),
            category: "Audio".into(),
            pricing_model: "Free".into(),
        }
    }

    #[test]
    fn valid_draft_produces_payload() {
        let payload = draft().validate().unwrap();
        assert_eq!(payload.name, "Whisper");
        assert_eq!(payload.category, Category::Audio);
        assert_eq!(payload.pricing_model, PricingModel::Free);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut d = draft();
        d.name = String::new();
        assert_eq!(d.validate(), Err(ToolFormError::MissingName));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let mut d = draft();
        d.name = "   ".into();
        assert_eq!(d.validate(), Err(ToolFormError::MissingName));
    }

    #[test]
    fn unselected_category_is_rejected() {
        let mut d = draft();
        d.category = String::new();
        assert_eq!(d.validate(), Err(ToolFormError::MissingCategory));
    }

    #[test]
    fn unselected_pricing_is_rejected() {
        let mut d = draft();
        d.pricing_model = String::new();
        assert_eq!(d.validate(), Err(ToolFormError::MissingPricing));
    }

    #[test]
    fn draft_round_trips_from_a_tool() {
        let tool = Tool {
            id: "t1".into(),
            name: "Whisper".into(),
            use_case: "Speech to text".into(),
            category: Category::Audio,
            pricing_model: PricingModel::Free,
            average_rating: 4.5,
            review_count: 12,
        };
        let payload = ToolDraft::from_tool(&tool).validate().unwrap();
        assert_eq!(payload.name, tool.name);
        assert_eq!(payload.category, tool.category);
        assert_eq!(payload.pricing_model, tool.pricing_model);
    }

    #[test]
    fn category_round_trips_through_wire_labels() {
        for c in Category::ALL {
            assert_eq!(Category::from_str(c.label()), Ok(c));
        }
        let json = serde_json::to_string(&Category::ComputerVision).unwrap();
        assert_eq!(json, "\"Computer Vision\"");
    }

    #[test]
    fn tool_deserializes_from_backend_shape() {
        let tool: Tool = serde_json::from_str(
            r#"{"id":"t1","name":"Whisper","use_case":"Speech to text",
                "category":"Audio","pricing_model":"Free",
                "average_rating":4.5,"review_count":12}"#,
        )
        .unwrap();
        assert_eq!(tool.category, Category::Audio);
        assert_eq!(tool.review_count, 12);
    }
}
