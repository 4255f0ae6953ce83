//! Result history logging
//!
//! Appends one row per calculation to a bounded CSV log (structured,
//! numbers only) plus a parallel human-readable variant, evicting the
//! oldest rows beyond capacity. Logging is best-effort from the
//! orchestrator's point of view: a failed write is reported, never
//! fatal to the calculation.

use crate::calculator::CalcResult;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rows kept per log file, excluding the header
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Persistence failure while writing or reading the log
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Log I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Log format error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Accepts a finished result record for persistence
pub trait ResultLogger {
    fn record(&self, result: &CalcResult) -> Result<(), LogError>;
}

/// Structured log columns, in order
const HEADER: [&str; 20] = [
    "weapon",
    "monster",
    "part",
    "sharpness",
    "skills",
    "combo",
    "attack",
    "affinity",
    "element",
    "expected_attack",
    "effective_attack",
    "effective_element",
    "total_physical",
    "total_elemental",
    "combo_time",
    "dps",
    "base_hits",
    "effective_hits",
    "combo_count",
    "duration",
];

/// CSV logger writing a structured and a readable file side by side
pub struct CsvResultLogger {
    path: PathBuf,
    readable_path: PathBuf,
    max_rows: usize,
}

impl CsvResultLogger {
    pub fn new(path: impl Into<PathBuf>, readable_path: impl Into<PathBuf>) -> Self {
        CsvResultLogger {
            path: path.into(),
            readable_path: readable_path.into(),
            max_rows: DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn with_capacity(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    fn append_structured(&self, result: &CalcResult) -> Result<(), LogError> {
        let is_new = !self.path.exists();
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        if is_new {
            writer.write_record(HEADER)?;
        }
        writer.write_record([
            result.weapon.as_str(),
            result.monster.as_str(),
            result.part.as_str(),
            result.sharpness.as_str(),
            result.skills.as_str(),
            result.combo.as_str(),
            &format!("{:.1}", result.attack),
            &format!("{:.1}", result.affinity),
            &format!("{:.1}", result.element),
            &format!("{:.1}", result.expected_attack),
            &format!("{:.1}", result.effective_attack),
            &format!("{:.1}", result.effective_element),
            &format!("{:.1}", result.total_physical),
            &format!("{:.1}", result.total_elemental),
            &format!("{:.2}", result.combo_time),
            &format!("{:.2}", result.total_dps),
            &result.base_sharpness_hits.to_string(),
            &result.effective_hits.to_string(),
            &result.combo_count.to_string(),
            &format!("{:.1}", result.sustain_duration),
        ])?;
        writer.flush()?;
        Ok(())
    }

    fn append_readable(&self, result: &CalcResult) -> Result<(), LogError> {
        let is_new = !self.readable_path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.readable_path)?;
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

        if is_new {
            writer.write_record(["summary"])?;
        }
        writer.write_record([
            format!("weapon: {}", result.weapon),
            format!("monster: {}", result.monster),
            format!("part: {}", result.part),
            format!("sharpness: {}", result.sharpness),
            format!("skills: {}", result.skills),
            format!("combo: {}", result.combo),
            format!("attack: {:.1}", result.attack),
            format!("affinity: {:.1}%", result.affinity),
            format!("element: {:.1}", result.element),
            format!("expected attack: {:.1}", result.expected_attack),
            format!("effective attack: {:.1}", result.effective_attack),
            format!("effective element: {:.1}", result.effective_element),
            format!("total physical: {:.1}", result.total_physical),
            format!("total elemental: {:.1}", result.total_elemental),
            format!("combo time: {:.2}", result.combo_time),
            format!("dps: {:.2}", result.total_dps),
            format!("base hits: {}", result.base_sharpness_hits),
            format!("effective hits: {}", result.effective_hits),
            format!("combo count: {}", result.combo_count),
            format!("sustained: {:.1}s", result.sustain_duration),
        ])?;
        writer.flush()?;
        Ok(())
    }
}

impl ResultLogger for CsvResultLogger {
    fn record(&self, result: &CalcResult) -> Result<(), LogError> {
        self.append_structured(result)?;
        rotate_csv(&self.path, self.max_rows)?;
        self.append_readable(result)?;
        rotate_csv(&self.readable_path, self.max_rows)?;
        Ok(())
    }
}

/// Trim a log file down to its newest `max_rows` data rows, keeping
/// the header. Missing files are left alone.
pub fn rotate_csv(path: &Path, max_rows: usize) -> Result<(), LogError> {
    if !path.exists() {
        return Ok(());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;

    if rows.len() <= max_rows + 1 {
        return Ok(());
    }

    let header = &rows[0];
    let data = &rows[1..];
    let keep = &data[data.len() - max_rows..];

    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(header)?;
    for row in keep {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// One structured log row read back, string-formatted exactly as
/// written
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LogEntry {
    pub weapon: String,
    pub monster: String,
    pub part: String,
    pub sharpness: String,
    pub skills: String,
    pub combo: String,
    pub dps: String,
}

/// Read the structured log back as entries, oldest first.
pub fn read_entries(path: &Path) -> Result<Vec<LogEntry>, LogError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}
