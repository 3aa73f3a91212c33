//! Eligibility evaluation of exam scores against the built-in college table.
//!
//! The evaluator is a pure function of its submission and a read-only
//! [`ReferenceTable`]: each record is checked with the category's rule, the
//! matches are ranked by probability tier, and a report is assembled with
//! three recommendations chosen by whether anything matched.

pub mod catalog;
pub mod domain;
mod report;
mod router;
mod rules;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{DomesticRecord, InternationalRecord, ReferenceTable};
pub use domain::{
    Category, CategoryGroup, DomesticExam, InternationalProgram, Probability, RuleFamily,
    Submission, SubmissionError,
};
pub use report::{MatchResult, PredictionReport, DOMESTIC_RESULT_LIMIT};
pub use router::{prediction_router, PredictionRequest};
pub use views::{category_catalog, CategoryView};

use catalog::INTERNATIONAL_CLASSIFICATION;
use report::rank_matches;
use tracing::debug;

/// Stateless evaluator bound to a reference table.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEvaluator<'a> {
    table: &'a ReferenceTable,
}

impl Default for EligibilityEvaluator<'static> {
    fn default() -> Self {
        Self::new(ReferenceTable::shared())
    }
}

impl<'a> EligibilityEvaluator<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ReferenceTable {
        self.table
    }

    /// Evaluates untyped form inputs. Never fails: an unknown category simply
    /// has no reference records.
    pub fn evaluate(
        &self,
        category: &Category,
        score: f64,
        auxiliary: Option<f64>,
    ) -> PredictionReport {
        self.evaluate_submission(&Submission::new(category.clone(), score, auxiliary))
    }

    pub fn evaluate_submission(&self, submission: &Submission) -> PredictionReport {
        let (mut colleges, limit) = match submission {
            Submission::Domestic { exam, score } => (
                self.match_domestic(*exam, *score),
                Some(DOMESTIC_RESULT_LIMIT),
            ),
            Submission::Mba {
                gmat_score,
                work_experience_years,
            } => (
                self.match_international(
                    InternationalProgram::Mba,
                    *gmat_score,
                    *work_experience_years,
                ),
                None,
            ),
            Submission::Ms { gre_score, gpa } => (
                self.match_international(InternationalProgram::Ms, *gre_score, *gpa),
                None,
            ),
            Submission::Unrecognized { .. } => (Vec::new(), None),
        };

        rank_matches(&mut colleges);
        let matched = colleges.len();
        if let Some(limit) = limit {
            colleges.truncate(limit);
        }

        let category = submission.category();
        debug!(
            category = %category,
            matched,
            returned = colleges.len(),
            "evaluated college eligibility"
        );

        PredictionReport::assemble(
            category,
            submission.primary_score(),
            submission.auxiliary(),
            colleges,
        )
    }

    fn match_domestic(&self, exam: DomesticExam, score: f64) -> Vec<MatchResult> {
        let rule = exam.rule();
        self.table
            .domestic(exam)
            .iter()
            .filter_map(|record| {
                let outcome = rules::domestic_outcome(rule, score, record.cutoff)?;
                Some(MatchResult {
                    college: record.name,
                    course: Some(record.course),
                    classification: record.classification,
                    cutoff: Some(record.cutoff),
                    country: None,
                    probability: outcome.probability,
                    margin: outcome.margin,
                })
            })
            .collect()
    }

    fn match_international(
        &self,
        program: InternationalProgram,
        primary: f64,
        secondary: f64,
    ) -> Vec<MatchResult> {
        let rule = program.rule();
        self.table
            .international(program)
            .iter()
            .filter_map(|record| {
                let outcome = rules::international_outcome(rule, primary, secondary, record)?;
                Some(MatchResult {
                    college: record.name,
                    course: None,
                    classification: INTERNATIONAL_CLASSIFICATION,
                    cutoff: None,
                    country: Some(record.country),
                    probability: outcome.probability,
                    margin: outcome.margin,
                })
            })
            .collect()
    }
}

/// Evaluates against the standard reference table.
pub fn evaluate(category: &Category, score: f64, auxiliary: Option<f64>) -> PredictionReport {
    EligibilityEvaluator::default().evaluate(category, score, auxiliary)
}
