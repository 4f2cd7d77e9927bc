use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{AlumniCount, GradeRequirement, Internship},
};

/// Backing data for alumni statistics and internship postings
///
/// The in-memory implementation below serves fixed illustrative data. A
/// production deployment swaps in an aggregation backend keyed by
/// department and major without touching the services that call it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Certificates acquired by students of a department and major, most common first
    async fn alumni_counts(&self, department: &str, major: &str) -> AppResult<Vec<AlumniCount>>;

    /// All open internship postings
    async fn internships(&self) -> AppResult<Vec<Internship>>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// Fixed data, identical for every department and major
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource;

impl StaticDataSource {
    pub fn new() -> Self {
        Self
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn posting(
    company: &str,
    field: &str,
    duration: &str,
    eligibility: &str,
    deadline: NaiveDate,
    departments: &[&str],
    preferred_conditions: &[&str],
) -> Internship {
    Internship {
        company: company.to_string(),
        field: field.to_string(),
        duration: duration.to_string(),
        eligibility: GradeRequirement::parse(eligibility),
        deadline,
        departments: strings(departments),
        preferred_conditions: strings(preferred_conditions),
    }
}

#[async_trait::async_trait]
impl DataSource for StaticDataSource {
    async fn alumni_counts(&self, department: &str, major: &str) -> AppResult<Vec<AlumniCount>> {
        tracing::debug!(%department, %major, "Serving static alumni counts");

        Ok(vec![
            AlumniCount::new("정보처리기사", 150),
            AlumniCount::new("리눅스마스터", 100),
            AlumniCount::new("네트워크관리사", 80),
            AlumniCount::new("CCNA", 70),
            AlumniCount::new("데이터분석준전문가", 60),
        ])
    }

    async fn internships(&self) -> AppResult<Vec<Internship>> {
        Ok(vec![
            posting(
                "테크놀로지 주식회사",
                "소프트웨어 개발",
                "6개월",
                "3학년 이상",
                date(2024, 9, 30),
                &["컴퓨터공학부", "전기전자통신공학부"],
                &["학점 3.5 이상", "토익 700점 이상"],
            ),
            posting(
                "글로벌 시스템즈",
                "네트워크 엔지니어링",
                "4개월",
                "2학년 이상",
                date(2024, 8, 15),
                &["전기전자통신공학부", "컴퓨터공학부"],
                &["운전면허 보유", "한국사 자격증"],
            ),
            posting(
                "스마트 솔루션스",
                "데이터 분석",
                "3개월",
                "3학년 이상",
                date(2024, 10, 31),
                &["컴퓨터공학부", "산업경영학부"],
                &["데이터 분석 관련 자격증"],
            ),
            posting(
                "이노베이션 랩스",
                "인공지능",
                "12개월",
                "4학년",
                date(2024, 9, 15),
                &["컴퓨터공학부", "전기전자통신공학부"],
                &["인공지능 관련 프로젝트 경험", "학점 3.8 이상"],
            ),
            posting(
                "퓨처 테크",
                "클라우드 컴퓨팅",
                "2개월",
                "2학년 이상",
                date(2024, 8, 31),
                &["컴퓨터공학부", "메카트로닉스공학부"],
                &["클라우드 자격증", "토익 800점 이상"],
            ),
            posting(
                "메가 코퍼레이션",
                "로보틱스",
                "9개월",
                "3학년 이상",
                date(2024, 11, 30),
                &["메카트로닉스공학부", "컴퓨터공학부"],
                &["로봇 관련 경진대회 수상 경력"],
            ),
        ])
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
