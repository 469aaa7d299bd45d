//! Input snapshot loading.
//!
//! The engine reads a consistent, already-fetched snapshot of the profile,
//! weight history and food log. This module loads one from a JSON file and
//! optionally merges a CSV weight history.

use crate::{Error, FoodEntry, Profile, Result, WeightObservation};
use chrono::{DateTime, NaiveDate, Utc};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Profile, weight history and food log handed to the engine together
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub weights: Vec<WeightObservation>,
    #[serde(default)]
    pub food_log: BTreeMap<NaiveDate, Vec<FoodEntry>>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    ///
    /// Returns an empty snapshot if the file doesn't exist.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No snapshot found at {:?}, using empty snapshot", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        snapshot.validate()?;

        tracing::info!(
            "Loaded snapshot from {:?}: {} weights, {} logged days",
            path,
            snapshot.weights.len(),
            snapshot.food_log.len()
        );
        Ok(snapshot)
    }

    /// Reject values the engine's inputs can never hold
    fn validate(&self) -> Result<()> {
        if let Some(bad) = self.weights.iter().find(|w| w.weight_kg <= 0.0) {
            return Err(Error::Snapshot(format!(
                "Non-positive weight {} kg at {}",
                bad.weight_kg, bad.timestamp
            )));
        }

        for (date, entries) in &self.food_log {
            if entries.iter().any(|e| e.serving_multiplier <= 0.0) {
                return Err(Error::Snapshot(format!(
                    "Non-positive serving multiplier on {}",
                    date
                )));
            }
        }

        Ok(())
    }

    /// Append extra observations (order does not matter)
    pub fn merge_weights(&mut self, extra: Vec<WeightObservation>) {
        self.weights.extend(extra);
    }

    /// Weight from the most recent observation
    pub fn current_weight(&self) -> Option<f64> {
        crate::trend::latest_observation(&self.weights).map(|o| o.weight_kg)
    }

    /// Most recent day with logged food
    pub fn latest_logged_day(&self) -> Option<NaiveDate> {
        self.food_log.keys().next_back().copied()
    }

    /// Entries for a day (empty if nothing was logged)
    pub fn entries_for(&self, date: NaiveDate) -> &[FoodEntry] {
        self.food_log.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// CSV row format for weight history
#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: String,
    weight_kg: f64,
    note: Option<String>,
}

impl TryFrom<CsvRow> for WeightObservation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| Error::InvalidRow(format!("invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        if row.weight_kg <= 0.0 {
            return Err(Error::InvalidRow(format!("non-positive weight: {}", row.weight_kg)));
        }

        Ok(WeightObservation {
            weight_kg: row.weight_kg,
            timestamp,
            note: row.note.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// Load weight observations from a CSV file
///
/// Expects a `timestamp,weight_kg,note` header. Rows that fail to parse are
/// skipped with a warning. A missing file yields an empty history.
pub fn load_weights_csv(path: &Path) -> Result<Vec<WeightObservation>> {
    if !path.exists() {
        tracing::debug!("No weight CSV found at {:?}", path);
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut observations = Vec::new();
    for (row_num, result) in reader.deserialize::<CsvRow>().enumerate() {
        match result {
            Ok(row) => match WeightObservation::try_from(row) {
                Ok(obs) => observations.push(obs),
                Err(e) => {
                    tracing::warn!("Skipping weight row {}: {}", row_num + 1, e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize weight row {}: {}", row_num + 1, e);
            }
        }
    }

    tracing::debug!("Read {} weight observations from {:?}", observations.len(), path);
    Ok(observations)
}
