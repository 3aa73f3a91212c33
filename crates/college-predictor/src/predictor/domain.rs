use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Domestic entrance exams scored against a single cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DomesticExam {
    Jee,
    Neet,
    Cat,
    Clat,
}

impl DomesticExam {
    pub const ALL: [Self; 4] = [Self::Jee, Self::Neet, Self::Cat, Self::Clat];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Jee => "JEE",
            Self::Neet => "NEET",
            Self::Cat => "CAT",
            Self::Clat => "CLAT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Jee => "JEE (Engineering)",
            Self::Neet => "NEET (Medical)",
            Self::Cat => "CAT (Management)",
            Self::Clat => "CLAT (Law)",
        }
    }

    pub const fn rule(self) -> RuleFamily {
        match self {
            Self::Jee | Self::Clat => RuleFamily::Rank,
            Self::Neet | Self::Cat => RuleFamily::Percentile,
        }
    }
}

/// International programs scored against a primary test and a secondary metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InternationalProgram {
    Mba,
    Ms,
}

impl InternationalProgram {
    pub const ALL: [Self; 2] = [Self::Mba, Self::Ms];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Mba => "MBA",
            Self::Ms => "MS",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mba => "MBA Programs",
            Self::Ms => "MS Programs",
        }
    }

    pub const fn rule(self) -> RuleFamily {
        match self {
            Self::Mba => RuleFamily::ExperienceWeighted,
            Self::Ms => RuleFamily::GradeWeighted,
        }
    }
}

/// Category selector as submitted by a caller.
///
/// Codes outside the six supported ones are kept verbatim so they can be
/// echoed back in the empty-state recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Domestic(DomesticExam),
    International(InternationalProgram),
    Unrecognized(String),
}

impl Category {
    /// Parses a category code, ignoring case and surrounding whitespace.
    pub fn parse(code: &str) -> Self {
        let trimmed = code.trim();
        let normalized = trimmed.to_ascii_uppercase();

        if let Some(exam) = DomesticExam::ALL
            .into_iter()
            .find(|exam| exam.code() == normalized)
        {
            return Self::Domestic(exam);
        }

        if let Some(program) = InternationalProgram::ALL
            .into_iter()
            .find(|program| program.code() == normalized)
        {
            return Self::International(program);
        }

        Self::Unrecognized(trimmed.to_string())
    }

    pub fn supported() -> Vec<Self> {
        DomesticExam::ALL
            .into_iter()
            .map(Self::Domestic)
            .chain(InternationalProgram::ALL.into_iter().map(Self::International))
            .collect()
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Domestic(exam) => exam.code(),
            Self::International(program) => program.code(),
            Self::Unrecognized(code) => code,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Domestic(exam) => Some(exam.label()),
            Self::International(program) => Some(program.label()),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn group(&self) -> CategoryGroup {
        match self {
            Self::Domestic(_) => CategoryGroup::Domestic,
            Self::International(_) => CategoryGroup::International,
            Self::Unrecognized(_) => CategoryGroup::Unrecognized,
        }
    }

    pub fn rule(&self) -> Option<RuleFamily> {
        match self {
            Self::Domestic(exam) => Some(exam.rule()),
            Self::International(program) => Some(program.rule()),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Domestic,
    International,
    Unrecognized,
}

/// Eligibility formula family. One case per category family so every
/// formula is matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    /// Lower scores are better; eligible when the rank is within the cutoff.
    Rank,
    /// Higher scores are better; eligible when the percentile reaches the cutoff.
    Percentile,
    /// GMAT score weighed with years of work experience.
    ExperienceWeighted,
    /// GRE score weighed with grade-point average.
    GradeWeighted,
}

impl RuleFamily {
    pub const fn score_label(self) -> &'static str {
        match self {
            Self::Rank => "Rank",
            Self::Percentile => "Percentile",
            Self::ExperienceWeighted => "GMAT Score",
            Self::GradeWeighted => "GRE Score",
        }
    }

    pub const fn auxiliary_label(self) -> Option<&'static str> {
        match self {
            Self::Rank | Self::Percentile => None,
            Self::ExperienceWeighted => Some("Work Experience (years)"),
            Self::GradeWeighted => Some("GPA (out of 4.0)"),
        }
    }
}

/// Coarse admission confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Probability {
    High,
    Medium,
    Low,
}

impl Probability {
    /// Sort priority: High=3, Medium=2, Low=1.
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Typed query. The two international programs keep their metrics in
/// distinct named fields instead of sharing one numeric slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Domestic {
        exam: DomesticExam,
        score: f64,
    },
    Mba {
        gmat_score: f64,
        work_experience_years: f64,
    },
    Ms {
        gre_score: f64,
        gpa: f64,
    },
    Unrecognized {
        code: String,
        score: f64,
    },
}

impl Submission {
    /// Builds a submission from the untyped form inputs. A missing auxiliary
    /// value counts as zero; it is ignored for domestic exams.
    pub fn new(category: Category, score: f64, auxiliary: Option<f64>) -> Self {
        let auxiliary = auxiliary.unwrap_or(0.0);
        match category {
            Category::Domestic(exam) => Self::Domestic { exam, score },
            Category::International(InternationalProgram::Mba) => Self::Mba {
                gmat_score: score,
                work_experience_years: auxiliary,
            },
            Category::International(InternationalProgram::Ms) => Self::Ms {
                gre_score: score,
                gpa: auxiliary,
            },
            Category::Unrecognized(code) => Self::Unrecognized { code, score },
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Domestic { exam, .. } => Category::Domestic(*exam),
            Self::Mba { .. } => Category::International(InternationalProgram::Mba),
            Self::Ms { .. } => Category::International(InternationalProgram::Ms),
            Self::Unrecognized { code, .. } => Category::Unrecognized(code.clone()),
        }
    }

    pub fn primary_score(&self) -> f64 {
        match self {
            Self::Domestic { score, .. } | Self::Unrecognized { score, .. } => *score,
            Self::Mba { gmat_score, .. } => *gmat_score,
            Self::Ms { gre_score, .. } => *gre_score,
        }
    }

    pub fn auxiliary(&self) -> Option<f64> {
        match self {
            Self::Domestic { .. } | Self::Unrecognized { .. } => None,
            Self::Mba {
                work_experience_years,
                ..
            } => Some(*work_experience_years),
            Self::Ms { gpa, .. } => Some(*gpa),
        }
    }

    /// Rejects values the evaluator is not meant to see.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let primary = self.primary_score();
        if !primary.is_finite() {
            return Err(SubmissionError::NonFinite {
                field: "score",
                value: primary,
            });
        }

        if let Some(auxiliary) = self.auxiliary() {
            if !auxiliary.is_finite() {
                return Err(SubmissionError::NonFinite {
                    field: "auxiliary",
                    value: auxiliary,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
}
