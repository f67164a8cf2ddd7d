//! Line format of the records file.
//!
//! ```text
//! Week,EmployeeID,Name,Monday,Tuesday,Wednesday,Thursday,Friday
//! 10,E1,Alice,8,8,8,8,8
//! ```
//!
//! Fields are joined with a bare comma. Nothing is quoted or escaped, so ids and
//! names must not contain the delimiter.

use std::io::Write;

use anyhow::{anyhow, Result};
use csv::{QuoteStyle, StringRecord, Terminator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::record::EmployeeRecord;

pub const DELIMITER: u8 = b',';
pub const FIELD_COUNT: usize = 8;
pub const HEADER: [&str; FIELD_COUNT] = [
    "Week",
    "EmployeeID",
    "Name",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

#[derive(Debug, Serialize, Deserialize)]
struct StoredRow {
    #[serde(deserialize_with = "trim_and_parse_u32")]
    week: u32,
    employee_id: String,
    name: String,
    #[serde(deserialize_with = "trim_and_parse_u32")]
    monday: u32,
    #[serde(deserialize_with = "trim_and_parse_u32")]
    tuesday: u32,
    #[serde(deserialize_with = "trim_and_parse_u32")]
    wednesday: u32,
    #[serde(deserialize_with = "trim_and_parse_u32")]
    thursday: u32,
    #[serde(deserialize_with = "trim_and_parse_u32")]
    friday: u32,
}

impl From<&EmployeeRecord> for StoredRow {
    fn from(record: &EmployeeRecord) -> Self {
        let [monday, tuesday, wednesday, thursday, friday] = record.daily_hours;
        Self {
            week: record.week_number,
            employee_id: record.employee_id.clone(),
            name: record.name.clone(),
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
        }
    }
}

impl From<StoredRow> for EmployeeRecord {
    fn from(row: StoredRow) -> Self {
        EmployeeRecord {
            week_number: row.week,
            employee_id: row.employee_id,
            name: row.name,
            daily_hours: [row.monday, row.tuesday, row.wednesday, row.thursday, row.friday],
        }
    }
}

fn trim_and_parse_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    s.trim().parse::<u32>().map_err(serde::de::Error::custom)
}

fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Encodes a single record as one line, without the trailing newline.
pub fn encode_line(record: &EmployeeRecord) -> Result<String> {
    let mut wtr = writer(Vec::new());
    wtr.serialize(StoredRow::from(record))?;
    let bytes = wtr
        .into_inner()
        .map_err(|err| anyhow!("Could not flush encoded record: {}", err.error()))?;
    let line = String::from_utf8(bytes)?;
    Ok(line.trim_end_matches('\n').to_string())
}

/// Writes the header followed by one line per record, in slice order.
pub fn write_records<W: Write>(mut inner: W, records: &[EmployeeRecord]) -> Result<()> {
    writeln!(inner, "{}", HEADER.join(","))?;
    for record in records {
        writeln!(inner, "{}", encode_line(record)?)?;
    }
    inner.flush()?;
    Ok(())
}

/// Decodes file contents into records.
///
/// The first line is always treated as the header. Lines that are blank, short
/// of fields, or carry a non-numeric week or hour value are dropped.
pub fn decode_records(content: &[u8]) -> Vec<EmployeeRecord> {
    let body = match content.iter().position(|&b| b == b'\n') {
        Some(pos) => &content[pos + 1..],
        None => return Vec::new(),
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .flexible(true)
        .quoting(false)
        .from_reader(body);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                debug!("Skipping unreadable line: {}", err);
                continue;
            }
        };
        match decode_row(&row) {
            Some(record) => records.push(record),
            None => {
                // +1 accounts for the header line cut off above
                let line = row.position().map(|p| p.line() + 1);
                debug!(?line, fields = row.len(), "Skipping malformed line");
            }
        }
    }
    records
}

fn decode_row(row: &StringRecord) -> Option<EmployeeRecord> {
    if row.len() < FIELD_COUNT {
        return None;
    }
    let head: StringRecord = row.iter().take(FIELD_COUNT).collect();
    head.deserialize::<StoredRow>(None).ok().map(EmployeeRecord::from)
}
