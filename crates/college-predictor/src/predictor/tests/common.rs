use axum::response::Response;
use serde_json::Value;

use crate::predictor::{
    Category, DomesticExam, DomesticRecord, EligibilityEvaluator, InternationalProgram,
    MatchResult, PredictionReport, ReferenceTable,
};

pub(super) fn standard_evaluator() -> EligibilityEvaluator<'static> {
    EligibilityEvaluator::default()
}

pub(super) fn domestic(exam: DomesticExam) -> Category {
    Category::Domestic(exam)
}

pub(super) fn international(program: InternationalProgram) -> Category {
    Category::International(program)
}

pub(super) fn college_names(report: &PredictionReport) -> Vec<&'static str> {
    report.colleges.iter().map(|result| result.college).collect()
}

pub(super) fn find<'r>(report: &'r PredictionReport, college: &str) -> &'r MatchResult {
    report
        .colleges
        .iter()
        .find(|result| result.college == college)
        .unwrap_or_else(|| panic!("{college} should be in the report"))
}

pub(super) fn rank_record(name: &'static str, cutoff: f64) -> DomesticRecord {
    DomesticRecord {
        name,
        course: "Computer Science",
        classification: "Fixture",
        cutoff,
    }
}

/// Twelve JEE records with identical cutoffs, named `College 00`..`College 11`.
pub(super) fn crowded_jee_table() -> ReferenceTable {
    const NAMES: [&str; 12] = [
        "College 00",
        "College 01",
        "College 02",
        "College 03",
        "College 04",
        "College 05",
        "College 06",
        "College 07",
        "College 08",
        "College 09",
        "College 10",
        "College 11",
    ];
    let records = NAMES
        .into_iter()
        .map(|name| rank_record(name, 1000.0))
        .collect();
    ReferenceTable::default().with_domestic(DomesticExam::Jee, records)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
