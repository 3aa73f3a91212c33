use super::common::*;
use crate::predictor::{
    Category, DomesticExam, EligibilityEvaluator, Probability, ReferenceTable, Submission,
    SubmissionError,
};

fn mixed_tier_table() -> ReferenceTable {
    // With rank 90: cutoff 95 is Low, 100 is Medium, 200 is High.
    ReferenceTable::default().with_domestic(
        DomesticExam::Clat,
        vec![
            rank_record("Low A", 95.0),
            rank_record("High A", 200.0),
            rank_record("Medium A", 100.0),
            rank_record("Low B", 92.0),
            rank_record("High B", 300.0),
            rank_record("Medium B", 100.0),
            rank_record("Excluded", 80.0),
        ],
    )
}

#[test]
fn ranking_is_stable_within_each_tier() {
    let table = mixed_tier_table();
    let report =
        EligibilityEvaluator::new(&table).evaluate(&domestic(DomesticExam::Clat), 90.0, None);

    assert_eq!(
        college_names(&report),
        vec!["High A", "High B", "Medium A", "Medium B", "Low A", "Low B"]
    );
}

#[test]
fn tiers_never_interleave() {
    let table = mixed_tier_table();
    let report =
        EligibilityEvaluator::new(&table).evaluate(&domestic(DomesticExam::Clat), 90.0, None);

    let ranks: Vec<u8> = report
        .colleges
        .iter()
        .map(|result| result.probability.rank())
        .collect();
    assert!(ranks.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(report.with_probability(Probability::Medium).count(), 2);
}

#[test]
fn matched_reports_use_generic_recommendations() {
    let report = standard_evaluator().evaluate(&domestic(DomesticExam::Neet), 96.0, None);

    assert!(report.has_matches());
    assert_eq!(
        report.recommendations,
        [
            "Apply to a mix of reach, target, and safety colleges".to_string(),
            "Consider location and specialization preferences".to_string(),
            "Prepare strong application materials".to_string(),
        ]
    );
}

#[test]
fn empty_table_is_a_normal_result() {
    let table = ReferenceTable::default();
    let report = EligibilityEvaluator::new(&table).evaluate(&Category::parse("cat"), 99.9, None);

    assert_eq!(report.total_predictions, 0);
    assert_eq!(
        report.recommendations[0],
        "Consider improving your CAT score for better college options"
    );
}

#[test]
fn validation_rejects_non_finite_scores() {
    let submission = Submission::new(domestic(DomesticExam::Jee), f64::INFINITY, None);
    assert!(matches!(
        submission.validate(),
        Err(SubmissionError::NonFinite { field: "score", .. })
    ));

    let submission = Submission::Ms {
        gre_score: 320.0,
        gpa: f64::NAN,
    };
    assert!(matches!(
        submission.validate(),
        Err(SubmissionError::NonFinite {
            field: "auxiliary",
            ..
        })
    ));

    let submission = Submission::new(Category::parse("unknown"), 12.0, None);
    assert!(submission.validate().is_ok());
}
