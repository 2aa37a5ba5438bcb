use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Name used in the dataset when the owner did not register one.
pub const UNKNOWN_NAME: &str = "?";

/// One row of the dog registry, as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    #[serde(rename = "StichtagDatJahr")]
    pub report_year: i32,
    #[serde(rename = "HundenameText")]
    pub name: String,
    #[serde(rename = "GebDatHundJahr")]
    pub birth_year: i32,
    #[serde(rename = "SexHundCd")]
    pub sex_code: u8,
    #[serde(rename = "SexHundLang")]
    pub sex_label: String,
    #[serde(rename = "SexHundSort")]
    pub sex_sort: String,
    #[serde(rename = "AnzHunde")]
    pub dog_count: u32,
}

impl DogRecord {
    pub fn sex(&self) -> Option<Sex> {
        Sex::from_code(self.sex_code)
    }

    pub fn has_known_name(&self) -> bool {
        self.name != UNKNOWN_NAME
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Sex::Male),
            2 => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projection returned by `find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogMatch {
    pub name: String,
    pub birth_year: i32,
    /// First character of the dataset's sex label.
    pub sex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameStats {
    pub year: i32,
    pub total: usize,
    pub shortest: String,
    pub longest: String,
    pub most_common_overall: Vec<NameCount>,
    pub most_common_male: Vec<NameCount>,
    pub most_common_female: Vec<NameCount>,
    pub male_count: usize,
    pub female_count: usize,
}

/// Name, birth year and sex drawn for a new dog, before any media is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogDraft {
    pub name: String,
    pub birth_year: i32,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDog {
    pub year: i32,
    pub name: String,
    pub birth_year: i32,
    pub sex: Sex,
    pub image_url: String,
    /// Only set once the file is on disk with the expected size.
    pub image_path: PathBuf,
}
