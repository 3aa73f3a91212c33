use super::domain::{DomesticExam, InternationalProgram};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Institution admitting through a domestic entrance exam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomesticRecord {
    pub name: &'static str,
    pub course: &'static str,
    pub classification: &'static str,
    /// Closing rank for rank-based exams, minimum percentile otherwise.
    pub cutoff: f64,
}

/// University admitting through an international program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternationalRecord {
    pub name: &'static str,
    pub country: &'static str,
    /// Minimum GMAT (MBA) or GRE (MS) score.
    pub primary_threshold: f64,
    /// Minimum years of experience (MBA) or GPA (MS).
    pub secondary_threshold: f64,
}

/// Classification tag shared by every international record.
pub const INTERNATIONAL_CLASSIFICATION: &str = "University";

/// Ordered reference records per category. Record order is significant:
/// ranking ties keep it.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    domestic: HashMap<DomesticExam, Vec<DomesticRecord>>,
    international: HashMap<InternationalProgram, Vec<InternationalRecord>>,
}

impl ReferenceTable {
    pub fn standard() -> Self {
        let mut table = Self::default();
        for exam in DomesticExam::ALL {
            table = table.with_domestic(exam, standard_domestic_records(exam));
        }
        for program in InternationalProgram::ALL {
            table = table.with_international(program, standard_international_records(program));
        }
        table
    }

    /// Process-wide standard table, built on first use.
    pub fn shared() -> &'static Self {
        static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
        TABLE.get_or_init(Self::standard)
    }

    pub fn with_domestic(mut self, exam: DomesticExam, records: Vec<DomesticRecord>) -> Self {
        self.domestic.insert(exam, records);
        self
    }

    pub fn with_international(
        mut self,
        program: InternationalProgram,
        records: Vec<InternationalRecord>,
    ) -> Self {
        self.international.insert(program, records);
        self
    }

    pub fn domestic(&self, exam: DomesticExam) -> &[DomesticRecord] {
        self.domestic.get(&exam).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn international(&self, program: InternationalProgram) -> &[InternationalRecord] {
        self.international
            .get(&program)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

const fn domestic(
    name: &'static str,
    cutoff: f64,
    course: &'static str,
    classification: &'static str,
) -> DomesticRecord {
    DomesticRecord {
        name,
        course,
        classification,
        cutoff,
    }
}

const fn international(
    name: &'static str,
    primary_threshold: f64,
    secondary_threshold: f64,
    country: &'static str,
) -> InternationalRecord {
    InternationalRecord {
        name,
        country,
        primary_threshold,
        secondary_threshold,
    }
}

fn standard_domestic_records(exam: DomesticExam) -> Vec<DomesticRecord> {
    match exam {
        DomesticExam::Jee => vec![
            domestic("IIT Delhi", 63.0, "Computer Science", "IIT"),
            domestic("IIT Bombay", 67.0, "Computer Science", "IIT"),
            domestic("IIT Kanpur", 89.0, "Computer Science", "IIT"),
            domestic("IIT Kharagpur", 120.0, "Computer Science", "IIT"),
            domestic("NIT Trichy", 800.0, "Computer Science", "NIT"),
            domestic("NIT Warangal", 1200.0, "Computer Science", "NIT"),
            domestic("IIIT Hyderabad", 400.0, "Computer Science", "IIIT"),
            domestic("DTU Delhi", 3000.0, "Computer Science", "State"),
            domestic("NSUT Delhi", 4000.0, "Computer Science", "State"),
            domestic("BITS Pilani", 5000.0, "Computer Science", "Private"),
        ],
        DomesticExam::Neet => vec![
            domestic("AIIMS Delhi", 99.99, "MBBS", "AIIMS"),
            domestic("AIIMS Jodhpur", 99.95, "MBBS", "AIIMS"),
            domestic("JIPMER Puducherry", 99.8, "MBBS", "Central"),
            domestic("KGMU Lucknow", 98.5, "MBBS", "State"),
            domestic("GMC Mumbai", 97.0, "MBBS", "State"),
            domestic("CMC Vellore", 94.0, "MBBS", "Private"),
            domestic("GMC Nagpur", 92.0, "MBBS", "State"),
            domestic("Manipal University", 85.0, "MBBS", "Private"),
        ],
        DomesticExam::Cat => vec![
            domestic("IIM Ahmedabad", 99.5, "MBA", "IIM"),
            domestic("IIM Bangalore", 99.0, "MBA", "IIM"),
            domestic("IIM Calcutta", 98.5, "MBA", "IIM"),
            domestic("FMS Delhi", 98.0, "MBA", "University"),
            domestic("IIM Lucknow", 97.0, "MBA", "IIM"),
            domestic("XLRI Jamshedpur", 95.0, "MBA", "Private"),
            domestic("MDI Gurgaon", 94.0, "MBA", "Private"),
            domestic("IIFT Delhi", 90.0, "MBA", "Central"),
        ],
        DomesticExam::Clat => vec![
            domestic("NLSIU Bangalore", 25.0, "LLB", "NLU"),
            domestic("NALSAR Hyderabad", 50.0, "LLB", "NLU"),
            domestic("WBNUJS Kolkata", 100.0, "LLB", "NLU"),
            domestic("GNLU Gandhinagar", 150.0, "LLB", "NLU"),
            domestic("HNLU Raipur", 200.0, "LLB", "NLU"),
            domestic("CNLU Patna", 400.0, "LLB", "NLU"),
            domestic("Jamia Millia Islamia", 600.0, "LLB", "Central"),
        ],
    }
}

fn standard_international_records(program: InternationalProgram) -> Vec<InternationalRecord> {
    match program {
        InternationalProgram::Mba => vec![
            international("Harvard Business School", 730.0, 4.0, "USA"),
            international("Stanford GSB", 740.0, 4.0, "USA"),
            international("Wharton", 720.0, 5.0, "USA"),
            international("Columbia Business School", 710.0, 5.0, "USA"),
            international("INSEAD", 700.0, 5.0, "France"),
            international("LBS", 690.0, 5.0, "UK"),
            international("UCLA Anderson", 690.0, 4.0, "USA"),
            international("Rotman Toronto", 660.0, 4.0, "Canada"),
        ],
        InternationalProgram::Ms => vec![
            international("MIT", 330.0, 3.8, "USA"),
            international("Stanford", 325.0, 3.7, "USA"),
            international("CMU", 320.0, 3.6, "USA"),
            international("UC Berkeley", 315.0, 3.5, "USA"),
            international("Georgia Tech", 310.0, 3.4, "USA"),
            international("University of Toronto", 310.0, 3.4, "Canada"),
            international("UT Austin", 305.0, 3.3, "USA"),
            international("UBC Vancouver", 300.0, 3.2, "Canada"),
        ],
    }
}
