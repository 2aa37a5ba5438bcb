use crate::domain::model::{DogMatch, NameCount, NameStats, NewDog};
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Tab separated, one item per line
    Plain,
    /// Aligned columns with headings
    #[default]
    Table,
    /// Pretty-printed JSON envelope
    Json,
}

#[derive(Serialize)]
struct JsonOut<'a, T: Serialize> {
    ok: bool,
    command: &'a str,
    year: i32,
    data: T,
}

fn to_json<T: Serialize>(command: &str, year: i32, data: T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut {
        ok: true,
        command,
        year,
        data,
    })?)
}

/// Column widths are counted in chars, not bytes or display cells.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = vec![
        table_line(headers.iter().copied(), &widths),
        table_line(rule.iter().map(String::as_str), &widths),
    ];
    for row in rows {
        out.push(table_line(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn render_matches(
    format: OutputFormat,
    name: &str,
    year: i32,
    matches: &[DogMatch],
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json("find", year, matches),
        OutputFormat::Plain => Ok(matches
            .iter()
            .map(|m| format!("{}\t{}\t{}", m.name, m.birth_year, m.sex))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            if matches.is_empty() {
                return Ok(format!("No dogs named '{}' registered in {}", name, year));
            }
            let rows: Vec<Vec<String>> = matches
                .iter()
                .map(|m| vec![m.name.clone(), m.birth_year.to_string(), m.sex.clone()])
                .collect();
            Ok(format!(
                "{} dog(s) named '{}' in {}\n\n{}",
                matches.len(),
                name,
                year,
                table(&["Name", "Birth year", "Sex"], &rows)
            ))
        }
    }
}

fn inline_counts(counts: &[NameCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{} ({})", c.name, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_stats(format: OutputFormat, stats: &NameStats) -> Result<String> {
    match format {
        OutputFormat::Json => to_json("stats", stats.year, stats),
        OutputFormat::Plain => Ok([
            format!("Year: {}", stats.year),
            format!("Shortest: {}", stats.shortest),
            format!("Longest: {}", stats.longest),
            format!("Male dogs: {}", stats.male_count),
            format!("Female dogs: {}", stats.female_count),
            "10 most common names".to_string(),
            format!("Overall: {}", inline_counts(&stats.most_common_overall)),
            format!("Male: {}", inline_counts(&stats.most_common_male)),
            format!("Female: {}", inline_counts(&stats.most_common_female)),
        ]
        .join("\n")),
        OutputFormat::Table => {
            let summary = table(
                &["Statistic", "Value"],
                &[
                    vec!["Registered dogs".to_string(), stats.total.to_string()],
                    vec!["Male".to_string(), stats.male_count.to_string()],
                    vec!["Female".to_string(), stats.female_count.to_string()],
                    vec!["Shortest name".to_string(), stats.shortest.clone()],
                    vec!["Longest name".to_string(), stats.longest.clone()],
                ],
            );

            let depth = stats
                .most_common_overall
                .len()
                .max(stats.most_common_male.len())
                .max(stats.most_common_female.len());
            let cell = |counts: &[NameCount], i: usize| {
                counts
                    .get(i)
                    .map(|c| format!("{} ({})", c.name, c.count))
                    .unwrap_or_default()
            };
            let rows: Vec<Vec<String>> = (0..depth)
                .map(|i| {
                    vec![
                        (i + 1).to_string(),
                        cell(&stats.most_common_overall, i),
                        cell(&stats.most_common_male, i),
                        cell(&stats.most_common_female, i),
                    ]
                })
                .collect();
            let ranking = table(&["#", "Overall", "Male", "Female"], &rows);

            Ok(format!(
                "Dog names in {}\n\n{}\n\nMost common names\n\n{}",
                stats.year, summary, ranking
            ))
        }
    }
}

pub fn render_new_dog(format: OutputFormat, dog: &NewDog) -> Result<String> {
    let path = dog.image_path.display().to_string();
    match format {
        OutputFormat::Json => to_json("create", dog.year, dog),
        OutputFormat::Plain => Ok(format!(
            "{}\t{}\t{}\t{}",
            dog.name, dog.birth_year, dog.sex, path
        )),
        OutputFormat::Table => Ok(table(
            &["Field", "Value"],
            &[
                vec!["Name".to_string(), dog.name.clone()],
                vec!["Birth year".to_string(), dog.birth_year.to_string()],
                vec!["Sex".to_string(), dog.sex.to_string()],
                vec!["Image".to_string(), path],
            ],
        )),
    }
}
