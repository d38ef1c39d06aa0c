use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation state of a review. Only approved reviews count towards a tool's
/// displayed average rating.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review as returned by the backend. `tool_name` is a denormalized display
/// copy; a review never changes its `tool_id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub tool_id: String,
    #[serde(default)]
    pub tool_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: ReviewStatus,
    pub date: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Body for submitting a new review.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewPayload {
    pub tool_id: String,
    pub rating: u8,
    pub comment: String,
}

/// Star-rating distribution for one tool's review history. Pure derivation,
/// no mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    average: f64,
    counts: [u32; 5],
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut counts = [0u32; 5];
        for review in reviews {
            if (1..=5).contains(&review.rating) {
                counts[usize::from(review.rating) - 1] += 1;
            }
        }
        let total: u32 = counts.iter().sum();
        let average = if total == 0 {
            0.0
        } else {
            let sum: u32 = counts
                .iter()
                .enumerate()
                .map(|(i, c)| (i as u32 + 1) * c)
                .sum();
            (f64::from(sum) / f64::from(total) * 10.0).round() / 10.0
        };
        Self { average, counts }
    }

    /// Mean of all ratings, rounded to one decimal. 0 when there are no reviews.
    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn count_for(&self, star: u8) -> u32 {
        debug_assert!((1..=5).contains(&star));
        self.counts[usize::from(star) - 1]
    }

    /// Bar width for the histogram, normalized so the fullest bucket renders
    /// at 100%. 0 when there are no reviews.
    pub fn bar_percent(&self, star: u8) -> f64 {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            0.0
        } else {
            f64::from(self.count_for(star)) / f64::from(max) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: format!("r{rating}"),
            tool_id: "t1".into(),
            tool_name: "Whisper".into(),
            rating,
            comment: None,
            status: ReviewStatus::Approved,
            date: "2026-01-15".into(),
            user_id: None,
        }
    }

    #[test]
    fn summary_of_known_distribution() {
        let reviews: Vec<Review> = [5, 5, 4, 3, 1].into_iter().map(review).collect();
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.average(), 3.6);
        assert_eq!(summary.count_for(5), 2);
        assert_eq!(summary.count_for(2), 0);
        assert_eq!(summary.total(), 5);
        // fullest bucket renders at full width
        assert_eq!(summary.bar_percent(5), 100.0);
        assert_eq!(summary.bar_percent(4), 50.0);
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = RatingSummary::from_reviews(&[]);
        assert_eq!(summary.average(), 0.0);
        assert_eq!(summary.total(), 0);
        for star in 1..=5 {
            assert_eq!(summary.count_for(star), 0);
            assert_eq!(summary.bar_percent(star), 0.0);
        }
    }

    #[test]
    fn out_of_range_ratings_are_ignored() {
        let mut bad = review(5);
        bad.rating = 9;
        let summary = RatingSummary::from_reviews(&[bad, review(3)]);
        assert_eq!(summary.total(), 1);
        assert_eq!(summary.average(), 3.0);
    }

    #[test]
    fn status_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::Approved).unwrap(),
            "\"approved\""
        );
        let status: ReviewStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, ReviewStatus::Pending);
    }

    #[test]
    fn review_deserializes_without_optional_fields() {
        let review: Review = serde_json::from_str(
            r#"{"id":"r1","tool_id":"t1","tool_name":"Whisper","rating":4,
                "comment":null,"status":"pending","date":"2026-01-15"}"#,
        )
        .unwrap();
        assert_eq!(review.comment, None);
        assert_eq!(review.user_id, None);
    }
}
