use super::domain::{Category, CategoryGroup, Probability, RuleFamily};
use serde::Serialize;

/// Maximum number of domestic matches returned after ranking.
pub const DOMESTIC_RESULT_LIMIT: usize = 10;

const MATCHED_RECOMMENDATIONS: [&str; 3] = [
    "Apply to a mix of reach, target, and safety colleges",
    "Consider location and specialization preferences",
    "Prepare strong application materials",
];

/// A reference record the submission satisfies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub college: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<&'static str>,
    #[serde(rename = "type")]
    pub classification: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'static str>,
    pub probability: Probability,
    /// Distance past the threshold. Reported only, never used for ordering.
    pub margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub category: Category,
    pub group: CategoryGroup,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleFamily>,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<f64>,
    pub total_predictions: usize,
    pub colleges: Vec<MatchResult>,
    pub recommendations: [String; 3],
}

impl PredictionReport {
    pub(crate) fn assemble(
        category: Category,
        score: f64,
        auxiliary: Option<f64>,
        colleges: Vec<MatchResult>,
    ) -> Self {
        let recommendations = recommendations(&category, !colleges.is_empty());
        Self {
            group: category.group(),
            rule: category.rule(),
            category,
            score,
            auxiliary,
            total_predictions: colleges.len(),
            colleges,
            recommendations,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.colleges.is_empty()
    }

    pub fn with_probability(&self, probability: Probability) -> impl Iterator<Item = &MatchResult> {
        self.colleges
            .iter()
            .filter(move |result| result.probability == probability)
    }
}

/// Orders matches High, Medium, Low. `sort_by` is stable, so records with
/// the same tier stay in reference-table order.
pub(crate) fn rank_matches(matches: &mut [MatchResult]) {
    matches.sort_by(|left, right| right.probability.rank().cmp(&left.probability.rank()));
}

pub(crate) fn recommendations(category: &Category, has_matches: bool) -> [String; 3] {
    if has_matches {
        return MATCHED_RECOMMENDATIONS.map(str::to_string);
    }

    [
        format!(
            "Consider improving your {} score for better college options",
            category.code()
        ),
        "Look into alternative colleges and programs".to_string(),
        "Consult with education counselors for guidance".to_string(),
    ]
}
