//! CSV loader for the reference tip table
//!
//! Expected header: `age_group,routine,kid_friendly_phrase,challenge_idea`.
//! Any unreadable row is fatal, since a broken table means a misconfigured
//! deployment.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::aggregates::TipTable;
use crate::domain::entities::TipRecord;
use crate::domain::value_objects::{AgeGroup, Routine};

#[derive(Debug, Deserialize)]
struct TipRow {
    age_group: String,
    routine: String,
    kid_friendly_phrase: String,
    challenge_idea: String,
}

impl TipRow {
    fn into_record(self) -> Result<TipRecord> {
        let age_group: AgeGroup = self.age_group.parse()?;
        let routine: Routine = self.routine.parse()?;
        Ok(TipRecord::new(
            age_group,
            routine,
            self.kid_friendly_phrase,
            self.challenge_idea,
        ))
    }
}

/// Load the tip table from a CSV file on disk
pub fn load_tip_table(path: impl AsRef<Path>) -> Result<TipTable> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open tip table at {}", path.display()))?;
    let table = read_tip_table(file)
        .with_context(|| format!("Failed to load tip table from {}", path.display()))?;

    if table.is_empty() {
        tracing::warn!("Tip table {} has no rows; every tip will use the default", path.display());
    }
    Ok(table)
}

/// Parse a tip table from any CSV source
pub fn read_tip_table<R: Read>(reader: R) -> Result<TipTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read tip table header")?
        .clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.context("Malformed tip row")?;
        // Line where the row starts; quoted fields may span several lines
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record = row
            .deserialize::<TipRow>(Some(&headers))
            .with_context(|| format!("Malformed tip row at line {}", line))?
            .into_record()
            .with_context(|| format!("Invalid tip row at line {}", line))?;
        records.push(record);
    }

    Ok(TipTable::new(records))
}
