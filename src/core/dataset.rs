use crate::domain::model::DogRecord;
use crate::utils::error::Result;
use csv::{ReaderBuilder, Trim};

/// Decodes the registry CSV and keeps the rows reported in `year`, in source order.
///
/// The published file starts with a UTF-8 byte order mark; it is stripped before
/// the header row is read. Any malformed row or missing column aborts decoding.
pub fn decode_records(raw: &[u8], year: i32) -> Result<Vec<DogRecord>> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(raw);
    if had_errors {
        tracing::warn!("Dataset contained invalid UTF-8; replaced with U+FFFD");
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let mut total = 0usize;
    let mut records = Vec::new();
    for row in reader.deserialize::<DogRecord>() {
        let record = row?;
        total += 1;
        if record.report_year == year {
            records.push(record);
        }
    }

    tracing::debug!("Decoded {} rows, {} reported in {}", total, records.len(), year);
    Ok(records)
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const HEADER: &str =
        "StichtagDatJahr,HundenameText,GebDatHundJahr,SexHundCd,SexHundLang,SexHundSort,AnzHunde";

    pub fn csv(rows: &[&str]) -> Vec<u8> {
        let mut out = String::from("\u{feff}");
        out.push_str(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out.into_bytes()
    }

    /// Rex/Bella/Rex in 2015 plus a row from another year.
    pub fn sample() -> Vec<u8> {
        csv(&[
            "2015,Rex,2012,1,male,m,1",
            "2015,Bella,2011,2,female,f,1",
            "2016,Luna,2014,2,female,f,1",
            "2015,Rex,2010,1,male,m,1",
        ])
    }
}
