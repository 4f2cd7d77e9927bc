use serde::{Deserialize, Serialize};

/// How many students of a major have acquired a certification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlumniCount {
    pub name: String,
    pub count: u32,
}

impl AlumniCount {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
