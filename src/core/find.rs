use crate::domain::model::{DogMatch, DogRecord};

/// Exact, case-sensitive lookup. An empty result is a valid answer.
pub fn find_by_name(records: &[DogRecord], name: &str) -> Vec<DogMatch> {
    records
        .iter()
        .filter(|record| record.name == name)
        .map(|record| DogMatch {
            name: record.name.clone(),
            birth_year: record.birth_year,
            sex: record
                .sex_label
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default(),
        })
        .collect()
}
