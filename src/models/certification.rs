use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Name substring marking an industrial-engineer (associate) credential
pub const ASSOCIATE_MARKER: &str = "산업기사";
/// Name substring marking an engineer-level credential
pub const ENGINEER_MARKER: &str = "기사";

/// Professional level of a credential, derived once from its name at ingestion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Untiered, open to every grade
    #[default]
    None,
    /// Industrial-engineer level, open from grade 2
    Associate,
    /// Engineer level, senior students only
    Engineer,
}

impl Tier {
    /// Derives the tier from a certificate name.
    ///
    /// The associate marker contains the engineer marker, so it is checked
    /// first; every name falls into exactly one tier.
    pub fn from_name(name: &str) -> Self {
        if name.contains(ASSOCIATE_MARKER) {
            Tier::Associate
        } else if name.contains(ENGINEER_MARKER) {
            Tier::Engineer
        } else {
            Tier::None
        }
    }

    /// Whether a student in `grade` may take a credential of this tier
    pub fn admits_grade(self, grade: u8) -> bool {
        match self {
            Tier::None => true,
            Tier::Associate => grade >= 2,
            Tier::Engineer => grade == 4,
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::None => write!(f, "none"),
            Tier::Associate => write!(f, "associate"),
            Tier::Engineer => write!(f, "engineer"),
        }
    }
}

/// One certification in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationRecord {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub related_fields: Vec<String>,
    #[serde(default)]
    pub related_departments: Vec<String>,
    #[serde(default)]
    pub related_majors: Vec<String>,
    pub difficulty: u8,
    #[serde(default)]
    pub career_level: Vec<u32>,
    pub popularity: u8,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub graduation_requirement: bool,
    /// Filled in by the catalog loader, never read from the source
    #[serde(skip_deserializing)]
    pub tier: Tier,
}

impl CertificationRecord {
    /// Highest career level listed, 0 when none are
    pub fn max_career_level(&self) -> u32 {
        self.career_level.iter().copied().max().unwrap_or(0)
    }

    /// Iterates every tag across fields, departments and majors
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.related_fields
            .iter()
            .chain(self.related_departments.iter())
            .chain(self.related_majors.iter())
            .map(String::as_str)
    }

    /// O/X mark shown for the graduation requirement
    pub fn graduation_mark(&self) -> &'static str {
        if self.graduation_requirement {
            "O"
        } else {
            "X"
        }
    }

    /// Checks the catalog invariants for a single record
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !(1..=5).contains(&self.difficulty) {
            return Err(format!(
                "difficulty {} of '{}' is outside 1..=5",
                self.difficulty, self.name
            ));
        }
        if !(1..=5).contains(&self.popularity) {
            return Err(format!(
                "popularity {} of '{}' is outside 1..=5",
                self.popularity, self.name
            ));
        }
        Ok(())
    }
}

/// Accepts a JSON bool or one of the O/X, Y/N, true/false spellings
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "o" | "y" | "yes" | "true" => Ok(true),
            "x" | "n" | "no" | "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid graduation_requirement flag '{}'",
                other
            ))),
        },
    }
}
