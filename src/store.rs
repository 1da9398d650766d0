//! Append-only persistence for analysis snapshots.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One persisted analysis snapshot. Written once, never read back by this
/// service. Absent request fields serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: String,
    pub old_description: Option<String>,
    pub new_description: Option<String>,
    pub analysis_result: Option<Value>,
}

/// Write `record` as pretty-printed UTF-8 JSON under `dir`, creating the
/// directory if needed. Returns the filename used.
///
/// Filenames carry a second-resolution timestamp
/// (`skill_analysis_<YYYYMMDD>_<HHMMSS>.json`); when two saves land in the
/// same second, a numeric suffix is appended before `.json` so neither file
/// is overwritten.
pub fn save_record(dir: &Path, record: &AnalysisRecord, now: DateTime<Local>) -> Result<String> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let stem = format!("skill_analysis_{}", now.format("%Y%m%d_%H%M%S"));
    let mut filename = format!("{stem}.json");
    let mut path = dir.join(&filename);
    let mut counter = 1u32;
    while path.exists() {
        filename = format!("{stem}_{counter}.json");
        path = dir.join(&filename);
        counter += 1;
    }

    // serde_json leaves non-ASCII characters unescaped, so the Chinese text
    // stays readable in the saved file.
    let json =
        serde_json::to_string_pretty(record).context("failed to serialize analysis record")?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    debug!("Saved analysis record to {}", path.display());
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record() -> AnalysisRecord {
        AnalysisRecord {
            timestamp: "2026-08-25 10:00:00".to_string(),
            old_description: Some("造成100點傷害".to_string()),
            new_description: Some("造成150點傷害，並暈眩1秒".to_string()),
            analysis_result: Some(serde_json::json!({
                "success": true,
                "analysis": "❌ 數值不一致（中等）",
            })),
        }
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("analysis_logs");

        let filename = save_record(&log_dir, &sample_record(), Local::now()).unwrap();

        assert!(filename.starts_with("skill_analysis_"));
        assert!(filename.ends_with(".json"));
        assert!(log_dir.join(&filename).exists());
    }

    #[test]
    fn test_saved_record_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let record = sample_record();

        let filename = save_record(temp_dir.path(), &record, Local::now()).unwrap();
        let content = fs::read_to_string(temp_dir.path().join(filename)).unwrap();
        let parsed: AnalysisRecord = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed.old_description, record.old_description);
        assert_eq!(parsed.new_description, record.new_description);
        assert_eq!(parsed.analysis_result, record.analysis_result);
        assert_eq!(parsed.timestamp, record.timestamp);
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let temp_dir = TempDir::new().unwrap();

        let filename = save_record(temp_dir.path(), &sample_record(), Local::now()).unwrap();
        let content = fs::read_to_string(temp_dir.path().join(filename)).unwrap();

        assert!(content.contains("造成100點傷害"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_same_second_saves_get_distinct_filenames() {
        let temp_dir = TempDir::new().unwrap();
        let record = sample_record();
        let now = Local::now();

        let first = save_record(temp_dir.path(), &record, now).unwrap();
        let second = save_record(temp_dir.path(), &record, now).unwrap();
        let third = save_record(temp_dir.path(), &record, now).unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert!(second.ends_with("_1.json"));
        assert!(third.ends_with("_2.json"));
        assert!(temp_dir.path().join(&first).exists());
        assert!(temp_dir.path().join(&second).exists());
        assert!(temp_dir.path().join(&third).exists());
    }

    #[test]
    fn test_save_fails_when_directory_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("analysis_logs");
        fs::write(&blocker, "not a directory").unwrap();

        let result = save_record(&blocker, &sample_record(), Local::now());
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = AnalysisRecord {
            timestamp: "2026-08-25 10:00:00".to_string(),
            old_description: None,
            new_description: None,
            analysis_result: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["old_description"].is_null());
        assert!(json["analysis_result"].is_null());
    }
}
