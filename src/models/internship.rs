use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which school years may apply to an internship
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum GradeRequirement {
    /// "N학년 이상"
    AtLeast(u8),
    /// "N학년"
    Exactly(u8),
    /// Anything the parser does not recognise
    Any,
}

impl GradeRequirement {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let Some((number, rest)) = text.split_once("학년") else {
            return GradeRequirement::Any;
        };
        let Ok(grade) = number.trim().parse::<u8>() else {
            return GradeRequirement::Any;
        };
        match rest.trim() {
            "이상" => GradeRequirement::AtLeast(grade),
            "" => GradeRequirement::Exactly(grade),
            _ => GradeRequirement::Any,
        }
    }

    pub fn admits(self, grade: u8) -> bool {
        match self {
            GradeRequirement::AtLeast(min) => grade >= min,
            GradeRequirement::Exactly(required) => grade == required,
            GradeRequirement::Any => true,
        }
    }
}

impl From<String> for GradeRequirement {
    fn from(text: String) -> Self {
        GradeRequirement::parse(&text)
    }
}

impl From<GradeRequirement> for String {
    fn from(requirement: GradeRequirement) -> Self {
        requirement.to_string()
    }
}

impl Display for GradeRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeRequirement::AtLeast(grade) => write!(f, "{}학년 이상", grade),
            GradeRequirement::Exactly(grade) => write!(f, "{}학년", grade),
            GradeRequirement::Any => write!(f, "제한 없음"),
        }
    }
}

/// Duration bucket an internship falls into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    /// 1 to 4 months
    ShortTerm,
    /// From the configured lower bound up to 12 months
    LongTerm,
    Other,
}

/// An internship posting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Internship {
    pub company: String,
    pub field: String,
    /// Display duration such as "6개월"
    pub duration: String,
    pub eligibility: GradeRequirement,
    pub deadline: NaiveDate,
    pub departments: Vec<String>,
    #[serde(default)]
    pub preferred_conditions: Vec<String>,
}

impl Internship {
    /// GPA threshold stated in a "학점 X 이상" preferred condition, if any
    pub fn preferred_gpa(&self) -> Option<f64> {
        self.preferred_conditions.iter().find_map(|condition| {
            let rest = condition.trim().strip_prefix("학점")?;
            let value = rest.trim().strip_suffix("이상")?;
            value.trim().parse::<f64>().ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade_requirement() {
        assert_eq!(GradeRequirement::parse("3학년 이상"), GradeRequirement::AtLeast(3));
        assert_eq!(GradeRequirement::parse("4학년"), GradeRequirement::Exactly(4));
        assert_eq!(GradeRequirement::parse("누구나"), GradeRequirement::Any);
        assert_eq!(GradeRequirement::parse("x학년"), GradeRequirement::Any);
    }

    #[test]
    fn test_grade_requirement_admits() {
        assert!(GradeRequirement::AtLeast(2).admits(3));
        assert!(!GradeRequirement::AtLeast(3).admits(2));
        assert!(GradeRequirement::Exactly(4).admits(4));
        assert!(!GradeRequirement::Exactly(4).admits(3));
        assert!(GradeRequirement::Any.admits(1));
    }

    #[test]
    fn test_grade_requirement_serializes_as_text() {
        let json = serde_json::to_string(&GradeRequirement::AtLeast(2)).unwrap();
        assert_eq!(json, "\"2학년 이상\"");
        let parsed: GradeRequirement = serde_json::from_str("\"4학년\"").unwrap();
        assert_eq!(parsed, GradeRequirement::Exactly(4));
    }

    #[test]
    fn test_preferred_gpa() {
        let internship = Internship {
            company: "테크놀로지 주식회사".to_string(),
            field: "소프트웨어 개발".to_string(),
            duration: "6개월".to_string(),
            eligibility: GradeRequirement::AtLeast(3),
            deadline: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
            departments: vec!["컴퓨터공학부".to_string()],
            preferred_conditions: vec!["토익 700점 이상".to_string(), "학점 3.5 이상".to_string()],
        };
        assert_eq!(internship.preferred_gpa(), Some(3.5));
    }
}
