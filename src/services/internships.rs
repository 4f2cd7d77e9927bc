use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{DurationClass, Internship},
    services::data_source::DataSource,
};

/// Inclusive lower bound, in months, of a long-term internship
pub const DEFAULT_LONG_TERM_MIN_MONTHS: u32 = 6;

const SHORT_TERM_MAX_MONTHS: u32 = 4;
const LONG_TERM_MAX_MONTHS: u32 = 12;

/// Filter applied to internship postings
#[derive(Debug, Clone, Deserialize)]
pub struct InternshipQuery {
    pub department: String,
    /// Duration classes to include; short and long term when absent
    #[serde(default)]
    pub durations: Option<Vec<DurationClass>>,
    /// Posting fields to include; every field when empty
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub grade: Option<u8>,
    /// Student GPA; postings preferring a higher GPA are dropped
    #[serde(default)]
    pub min_gpa: Option<f64>,
}

impl InternshipQuery {
    pub fn for_department(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            durations: None,
            fields: Vec::new(),
            grade: None,
            min_gpa: None,
        }
    }

    fn wants(&self, class: DurationClass) -> bool {
        match &self.durations {
            Some(classes) => classes.contains(&class),
            None => matches!(class, DurationClass::ShortTerm | DurationClass::LongTerm),
        }
    }
}

/// A posting together with its parsed duration
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassifiedInternship {
    #[serde(flatten)]
    pub internship: Internship,
    pub months: u32,
    pub duration_class: DurationClass,
}

/// Matching postings grouped by duration class, each in source order
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct InternshipSearchResult {
    pub short_term: Vec<ClassifiedInternship>,
    pub long_term: Vec<ClassifiedInternship>,
}

impl InternshipSearchResult {
    pub fn len(&self) -> usize {
        self.short_term.len() + self.long_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Leading month count of a duration such as "6개월"; 0 when unparseable
pub fn parse_duration_months(duration: &str) -> u32 {
    let Some(token) = duration.split_whitespace().next() else {
        return 0;
    };
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

pub fn classify_duration(months: u32, long_term_min_months: u32) -> DurationClass {
    if (1..=SHORT_TERM_MAX_MONTHS).contains(&months) {
        DurationClass::ShortTerm
    } else if (long_term_min_months..=LONG_TERM_MAX_MONTHS).contains(&months) {
        DurationClass::LongTerm
    } else {
        DurationClass::Other
    }
}

fn matches(query: &InternshipQuery, internship: &Internship) -> bool {
    if !internship.departments.contains(&query.department) {
        return false;
    }
    if !query.fields.is_empty() && !query.fields.contains(&internship.field) {
        return false;
    }
    if let Some(grade) = query.grade {
        if !internship.eligibility.admits(grade) {
            return false;
        }
    }
    if let (Some(gpa), Some(preferred)) = (query.min_gpa, internship.preferred_gpa()) {
        if preferred > gpa {
            return false;
        }
    }
    true
}

/// Filters the source's postings by department, duration, field, grade and GPA
pub async fn search_internships(
    source: &dyn DataSource,
    query: &InternshipQuery,
    long_term_min_months: u32,
) -> AppResult<InternshipSearchResult> {
    let postings = source.internships().await?;
    let total = postings.len();

    let mut result = InternshipSearchResult::default();
    for internship in postings {
        if !matches(query, &internship) {
            continue;
        }

        let months = parse_duration_months(&internship.duration);
        let duration_class = classify_duration(months, long_term_min_months);
        if !query.wants(duration_class) {
            continue;
        }

        let classified = ClassifiedInternship {
            internship,
            months,
            duration_class,
        };
        match duration_class {
            DurationClass::ShortTerm => result.short_term.push(classified),
            DurationClass::LongTerm => result.long_term.push(classified),
            DurationClass::Other => {}
        }
    }

    tracing::info!(
        source = source.name(),
        department = %query.department,
        total,
        matched = result.len(),
        "Internship search completed"
    );

    Ok(result)
}
