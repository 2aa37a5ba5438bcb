use crate::domain::model::{DogRecord, NameCount, NameStats, Sex};
use crate::utils::error::{DogError, Result};
use std::collections::HashMap;

pub const TOP_NAMES: usize = 10;

/// Counts names and returns the `limit` most frequent ones.
///
/// Higher counts come first; equal counts keep the order in which the names
/// were first seen.
pub fn most_common<'a, I>(names: I, limit: usize) -> Vec<NameCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for name in names {
        match positions.get(name) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

pub fn compute_stats(records: &[DogRecord], year: i32) -> Result<NameStats> {
    let overall: Vec<&str> = records
        .iter()
        .filter(|r| r.has_known_name())
        .map(|r| r.name.as_str())
        .collect();

    let shortest = overall.iter().min_by_key(|name| name.chars().count());
    // max_by_key keeps the last maximum; scanning in reverse makes that the first one
    let longest = overall.iter().rev().max_by_key(|name| name.chars().count());

    let (shortest, longest) = match (shortest, longest) {
        (Some(s), Some(l)) => (s.to_string(), l.to_string()),
        _ => return Err(DogError::NoData { year }),
    };

    let names_of = move |sex: Sex| {
        records
            .iter()
            .filter(move |r| r.sex() == Some(sex))
            .map(|r| r.name.as_str())
    };

    Ok(NameStats {
        year,
        total: records.len(),
        shortest,
        longest,
        most_common_overall: most_common(overall.iter().copied(), TOP_NAMES),
        most_common_male: most_common(names_of(Sex::Male), TOP_NAMES),
        most_common_female: most_common(names_of(Sex::Female), TOP_NAMES),
        male_count: names_of(Sex::Male).count(),
        female_count: names_of(Sex::Female).count(),
    })
}
