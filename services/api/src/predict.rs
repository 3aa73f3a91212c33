use crate::infra::parse_score;
use clap::{Args, ValueEnum};
use college_predictor::error::AppError;
use college_predictor::predictor::{
    category_catalog, Category, DomesticExam, EligibilityEvaluator, InternationalProgram,
    PredictionReport, Probability, ReferenceTable, Submission,
};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Exam or program code: JEE, NEET, CAT, CLAT, MBA or MS
    #[arg(long)]
    pub(crate) category: String,
    /// Rank, percentile, GMAT or GRE score depending on the category
    #[arg(long, value_parser = parse_score, allow_negative_numbers = true)]
    pub(crate) score: f64,
    /// Years of work experience (MBA) or GPA out of 4.0 (MS); defaults to 0
    #[arg(long, value_parser = parse_score, allow_negative_numbers = true)]
    pub(crate) auxiliary: Option<f64>,
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        category,
        score,
        auxiliary,
        format,
    } = args;

    let submission = Submission::new(Category::parse(&category), score, auxiliary);
    submission.validate()?;

    let report = EligibilityEvaluator::default().evaluate_submission(&submission);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_report(&mut out, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &report)?,
    }

    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_catalog(&mut out, ReferenceTable::shared())?;
    Ok(())
}

fn render_report(out: &mut impl Write, report: &PredictionReport) -> io::Result<()> {
    let score_label = report
        .rule
        .map(|rule| rule.score_label())
        .unwrap_or("Score");

    writeln!(out, "Predictions for {}", report.category)?;
    writeln!(out, "{score_label}: {}", report.score)?;
    if let (Some(rule), Some(auxiliary)) = (report.rule, report.auxiliary) {
        if let Some(label) = rule.auxiliary_label() {
            writeln!(out, "{label}: {auxiliary}")?;
        }
    }
    writeln!(out, "Total suitable colleges: {}", report.total_predictions)?;

    if report.has_matches() {
        let tiers = [Probability::High, Probability::Medium, Probability::Low]
            .map(|probability| report.with_probability(probability).count());
        writeln!(
            out,
            "Probability mix: {} high, {} medium, {} low",
            tiers[0], tiers[1], tiers[2]
        )?;
        writeln!(out, "\nRecommended colleges")?;
        for (position, result) in report.colleges.iter().enumerate() {
            let detail = match (result.course, result.cutoff, result.country) {
                (Some(course), Some(cutoff), _) => {
                    format!("{course}, {}, cutoff {cutoff}", result.classification)
                }
                (_, _, Some(country)) => country.to_string(),
                _ => result.classification.to_string(),
            };
            writeln!(
                out,
                "{}. {} - {} probability ({detail})",
                position + 1,
                result.college,
                result.probability
            )?;
        }
    }

    writeln!(out, "\nRecommendations")?;
    for recommendation in &report.recommendations {
        writeln!(out, "- {recommendation}")?;
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    position: usize,
    college: &'a str,
    course: Option<&'a str>,
    #[serde(rename = "type")]
    classification: &'a str,
    cutoff: Option<f64>,
    country: Option<&'a str>,
    probability: &'static str,
    margin: f64,
}

fn write_csv(out: &mut impl Write, report: &PredictionReport) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for (position, result) in report.colleges.iter().enumerate() {
        writer
            .serialize(CsvRow {
                position: position + 1,
                college: result.college,
                course: result.course,
                classification: result.classification,
                cutoff: result.cutoff,
                country: result.country,
                probability: result.probability.label(),
                margin: result.margin,
            })
            .map_err(io::Error::from)?;
    }
    writer.flush()
}

fn render_catalog(out: &mut impl Write, table: &ReferenceTable) -> io::Result<()> {
    for view in category_catalog(table) {
        writeln!(out, "{} [{}] - {} records", view.label, view.code, view.records)?;
        match Category::parse(view.code) {
            Category::Domestic(exam) => render_domestic_records(out, table, exam)?,
            Category::International(program) => {
                render_international_records(out, table, program)?
            }
            Category::Unrecognized(_) => {}
        }
    }
    Ok(())
}

fn render_domestic_records(
    out: &mut impl Write,
    table: &ReferenceTable,
    exam: DomesticExam,
) -> io::Result<()> {
    let score_label = exam.rule().score_label().to_lowercase();
    for record in table.domestic(exam) {
        writeln!(
            out,
            "  - {} | {} | {} | {score_label} {}",
            record.name, record.course, record.classification, record.cutoff
        )?;
    }
    Ok(())
}

fn render_international_records(
    out: &mut impl Write,
    table: &ReferenceTable,
    program: InternationalProgram,
) -> io::Result<()> {
    let rule = program.rule();
    let secondary_label = rule.auxiliary_label().unwrap_or("Secondary");
    for record in table.international(program) {
        writeln!(
            out,
            "  - {} | {} | {} {} | {secondary_label} {}",
            record.name,
            record.country,
            rule.score_label(),
            record.primary_threshold,
            record.secondary_threshold
        )?;
    }
    Ok(())
}
