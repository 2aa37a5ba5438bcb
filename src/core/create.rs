use crate::domain::model::{DogDraft, DogRecord, Sex};
use crate::utils::error::{DogError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use url::Url;

/// How name and birth year are picked for a new dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Name and birth year come from two independent draws over the whole year.
    #[default]
    Independent,
    /// Both fields come from one randomly chosen record.
    SameRecord,
}

pub fn draw_dog<R: Rng + ?Sized>(
    records: &[DogRecord],
    year: i32,
    mode: DrawMode,
    rng: &mut R,
) -> Result<DogDraft> {
    let no_data = || DogError::NoData { year };

    let (name, birth_year) = match mode {
        DrawMode::Independent => {
            let name = &records.choose(rng).ok_or_else(no_data)?.name;
            let birth_year = records.choose(rng).ok_or_else(no_data)?.birth_year;
            (name.clone(), birth_year)
        }
        DrawMode::SameRecord => {
            let record = records.choose(rng).ok_or_else(no_data)?;
            (record.name.clone(), record.birth_year)
        }
    };

    // uniform over the two labels, not weighted by the dataset
    let sex = *Sex::ALL.choose(rng).ok_or_else(no_data)?;

    Ok(DogDraft {
        name,
        birth_year,
        sex,
    })
}

/// Extension of the last path segment, including the dot, or "" if there is none.
pub fn media_extension(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .and_then(|segment| Path::new(segment).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

/// Replaces characters that cannot appear in a file name on common platforms.
pub fn sanitize_file_stem(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        "dog".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<name>_<year><ext>`, where `year` is the report year the dog was drawn from.
pub fn media_file_name(name: &str, year: i32, media_url: &Url) -> String {
    format!(
        "{}_{}{}",
        sanitize_file_stem(name),
        year,
        media_extension(media_url)
    )
}
