use super::common::*;
use crate::predictor::{
    evaluate, Category, CategoryGroup, DomesticExam, Probability, RuleFamily,
};

#[test]
fn jee_rank_at_cutoff_is_included_as_low() {
    let report = standard_evaluator().evaluate(&domestic(DomesticExam::Jee), 63.0, None);

    let delhi = find(&report, "IIT Delhi");
    assert_eq!(delhi.probability, Probability::Low);
    assert_eq!(delhi.cutoff, Some(63.0));
    assert_eq!(delhi.course, Some("Computer Science"));
    assert_eq!(delhi.classification, "IIT");
    assert_eq!(delhi.margin, 0.0);
    assert!(delhi.country.is_none());

    assert_eq!(find(&report, "IIT Bombay").probability, Probability::Low);
    assert_eq!(find(&report, "IIT Kanpur").probability, Probability::Medium);
    assert_eq!(find(&report, "IIT Kharagpur").probability, Probability::High);
}

#[test]
fn jee_report_orders_tiers_and_keeps_table_order_within_a_tier() {
    let report = evaluate(&domestic(DomesticExam::Jee), 63.0, None);

    assert_eq!(
        college_names(&report),
        vec![
            "IIT Kharagpur",
            "NIT Trichy",
            "NIT Warangal",
            "IIIT Hyderabad",
            "DTU Delhi",
            "NSUT Delhi",
            "BITS Pilani",
            "IIT Kanpur",
            "IIT Delhi",
            "IIT Bombay",
        ]
    );
    assert_eq!(report.total_predictions, 10);
    assert_eq!(report.group, CategoryGroup::Domestic);
    assert_eq!(report.rule, Some(RuleFamily::Rank));
    assert_eq!(report.score, 63.0);
    assert!(report.auxiliary.is_none());
}

#[test]
fn rank_just_past_every_cutoff_matches_nothing() {
    let report = evaluate(&domestic(DomesticExam::Jee), 5001.0, None);

    assert!(!report.has_matches());
    assert_eq!(report.total_predictions, 0);
    assert_eq!(
        report.recommendations[0],
        "Consider improving your JEE score for better college options"
    );
}

#[test]
fn clat_boundary_rank_is_included() {
    let report = evaluate(&domestic(DomesticExam::Clat), 100.0, None);

    assert_eq!(
        college_names(&report),
        vec![
            "GNLU Gandhinagar",
            "HNLU Raipur",
            "CNLU Patna",
            "Jamia Millia Islamia",
            "WBNUJS Kolkata",
        ]
    );
    assert_eq!(find(&report, "WBNUJS Kolkata").probability, Probability::Low);
    assert!(report
        .colleges
        .iter()
        .all(|result| result.cutoff.is_some_and(|cutoff| cutoff >= 100.0)));
}

#[test]
fn neet_percentile_at_cutoff_is_included_as_low() {
    let report = evaluate(&domestic(DomesticExam::Neet), 99.99, None);

    assert_eq!(find(&report, "AIIMS Delhi").probability, Probability::Low);
    assert_eq!(find(&report, "KGMU Lucknow").probability, Probability::Medium);
    assert_eq!(find(&report, "GMC Mumbai").probability, Probability::High);
    assert_eq!(report.total_predictions, 8);
    assert_eq!(
        college_names(&report),
        vec![
            "GMC Mumbai",
            "CMC Vellore",
            "GMC Nagpur",
            "Manipal University",
            "KGMU Lucknow",
            "AIIMS Delhi",
            "AIIMS Jodhpur",
            "JIPMER Puducherry",
        ]
    );
}

#[test]
fn cat_percentile_below_cutoff_is_excluded() {
    let report = evaluate(&domestic(DomesticExam::Cat), 95.0, None);

    assert_eq!(
        college_names(&report),
        vec!["IIFT Delhi", "MDI Gurgaon", "XLRI Jamshedpur"]
    );
    assert_eq!(find(&report, "MDI Gurgaon").probability, Probability::Medium);
    assert_eq!(find(&report, "XLRI Jamshedpur").margin, 0.0);
    assert_eq!(report.rule, Some(RuleFamily::Percentile));
}

#[test]
fn domestic_results_are_capped_after_ranking() {
    let table = crowded_jee_table();
    let evaluator = crate::predictor::EligibilityEvaluator::new(&table);

    let report = evaluator.evaluate(&domestic(DomesticExam::Jee), 1.0, None);

    assert_eq!(report.colleges.len(), crate::predictor::DOMESTIC_RESULT_LIMIT);
    assert_eq!(report.total_predictions, 10);
    assert_eq!(report.colleges[0].college, "College 00");
    assert_eq!(report.colleges[9].college, "College 09");
}

#[test]
fn domestic_exams_ignore_auxiliary_values() {
    let with = evaluate(&domestic(DomesticExam::Neet), 97.0, Some(12.0));
    let without = evaluate(&domestic(DomesticExam::Neet), 97.0, None);

    assert_eq!(with, without);
    assert!(with.auxiliary.is_none());
}

#[test]
fn unknown_category_yields_empty_state_report() {
    let category = Category::parse("GATE");
    let report = evaluate(&category, 250.0, Some(3.0));

    assert_eq!(category, Category::Unrecognized("GATE".to_string()));
    assert_eq!(report.group, CategoryGroup::Unrecognized);
    assert!(report.rule.is_none());
    assert_eq!(report.total_predictions, 0);
    assert_eq!(
        report.recommendations,
        [
            "Consider improving your GATE score for better college options".to_string(),
            "Look into alternative colleges and programs".to_string(),
            "Consult with education counselors for guidance".to_string(),
        ]
    );
}

#[test]
fn category_codes_parse_case_insensitively() {
    assert_eq!(Category::parse(" neet "), domestic(DomesticExam::Neet));
    assert_eq!(Category::parse("Clat"), domestic(DomesticExam::Clat));
    assert_eq!(Category::supported().len(), 6);
}
