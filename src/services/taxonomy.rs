use std::collections::HashMap;

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::models::StudentProfile;

/// A department and the majors it offers
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Department {
    pub name: String,
    pub majors: Vec<String>,
}

/// Static department -> majors -> fields mapping
#[derive(Debug, Clone, Default)]
pub struct TaxonomyTables {
    departments: Vec<Department>,
    major_fields: HashMap<String, Vec<String>>,
}

const STANDARD_DEPARTMENTS: &[(&str, &[&str])] = &[
    ("기계공학부", &["기계공학"]),
    (
        "메카트로닉스공학부",
        &["생산시스템전공", "제어시스템전공", "디지털시스템전공"],
    ),
    (
        "전기전자통신공학부",
        &["전기공학전공", "전자공학전공", "정보통신공학전공"],
    ),
    ("컴퓨터공학부", &["컴퓨터공학"]),
    ("디자인공학전공", &["디자인공학"]),
    ("건축공학전공", &["건축공학"]),
    ("에너지신소재공학전공", &["에너지신소재공학"]),
    ("화학생명공학전공", &["화학생명공학"]),
    ("산업경영학부", &["융합경영전공", "데이터경영전공"]),
    ("고용서비스정책학과", &["고용서비스정책"]),
];

const STANDARD_MAJOR_FIELDS: &[(&str, &[&str])] = &[
    ("기계공학", &["기계설계", "자동차", "로봇", "항공우주"]),
    ("생산시스템전공", &["생산관리", "품질관리", "물류관리", "공정설계"]),
    ("제어시스템전공", &["자동제어", "로봇제어", "센서 및 계측", "스마트팩토리"]),
    (
        "디지털시스템전공",
        &["임베디드시스템", "사물인터넷(IoT)", "디지털신호처리", "컴퓨터비전"],
    ),
    ("전기공학전공", &["전력시스템", "전기기기", "신재생에너지", "전력전자"]),
    ("전자공학전공", &["반도체", "디스플레이", "통신시스템", "전자회로설계"]),
    ("정보통신공학전공", &["네트워크", "무선통신", "정보보안", "신호처리"]),
    ("컴퓨터공학", &["소프트웨어개발", "인공지능", "빅데이터", "클라우드컴퓨팅"]),
    ("디자인공학", &["제품디자인", "UX/UI디자인", "그래픽디자인", "산업디자인"]),
    ("건축공학", &["건축설계", "건설관리", "건축환경", "구조공학"]),
    ("에너지신소재공학", &["신재생에너지", "나노소재", "전자재료", "에너지저장"]),
    ("화학생명공학", &["화학공정", "생물공학", "의약품개발", "환경공학"]),
    ("융합경영전공", &["마케팅", "재무관리", "인사관리", "전략경영"]),
    (
        "데이터경영전공",
        &["데이터분석", "비즈니스인텔리전스", "디지털마케팅", "핀테크"],
    ),
    ("고용서비스정책", &["고용정책", "직업상담", "인적자원개발", "노동법"]),
];

impl TaxonomyTables {
    pub fn new(departments: Vec<Department>, major_fields: HashMap<String, Vec<String>>) -> Self {
        Self {
            departments,
            major_fields,
        }
    }

    /// The built-in table of engineering and business departments
    pub fn standard() -> Self {
        let departments = STANDARD_DEPARTMENTS
            .iter()
            .map(|(name, majors)| Department {
                name: name.to_string(),
                majors: majors.iter().map(|m| m.to_string()).collect(),
            })
            .collect();

        let major_fields = STANDARD_MAJOR_FIELDS
            .iter()
            .map(|(major, fields)| {
                (
                    major.to_string(),
                    fields.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect();

        Self::new(departments, major_fields)
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn majors_of(&self, department: &str) -> Option<&[String]> {
        self.departments
            .iter()
            .find(|d| d.name == department)
            .map(|d| d.majors.as_slice())
    }

    pub fn fields_of(&self, major: &str) -> Option<&[String]> {
        self.major_fields.get(major).map(Vec::as_slice)
    }

    /// Checks that the profile names a real department/major/field chain
    pub fn validate_profile(&self, profile: &StudentProfile) -> Result<(), ConfigurationError> {
        if !(1..=4).contains(&profile.grade) {
            return Err(ConfigurationError::GradeOutOfRange(profile.grade));
        }

        let majors = self
            .majors_of(&profile.department)
            .ok_or_else(|| ConfigurationError::UnknownDepartment(profile.department.clone()))?;

        if !majors.contains(&profile.major) {
            return Err(ConfigurationError::UnknownMajor {
                department: profile.department.clone(),
                major: profile.major.clone(),
            });
        }

        let field_known = self
            .fields_of(&profile.major)
            .is_some_and(|fields| fields.contains(&profile.field));
        if !field_known {
            return Err(ConfigurationError::UnknownField {
                major: profile.major.clone(),
                field: profile.field.clone(),
            });
        }

        Ok(())
    }
}
