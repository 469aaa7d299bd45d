//! Weight trend over a history window.
//!
//! Observations do not need to be sorted; every lookup scans by timestamp.

use crate::WeightObservation;
use chrono::{DateTime, Duration, Utc};

/// The observation with the latest timestamp
pub fn latest_observation(observations: &[WeightObservation]) -> Option<&WeightObservation> {
    observations.iter().max_by_key(|o| o.timestamp)
}

/// Earliest observation taken at or after `start`
fn first_observation_since(
    observations: &[WeightObservation],
    start: DateTime<Utc>,
) -> Option<&WeightObservation> {
    observations
        .iter()
        .filter(|o| o.timestamp >= start)
        .min_by_key(|o| o.timestamp)
}

/// Net weight change in kg from the first observation at or after `start`
/// to the latest observation
///
/// Positive is a net gain. Returns None for an empty history or when
/// nothing was recorded since `start`.
pub fn weight_change_since(
    observations: &[WeightObservation],
    start: DateTime<Utc>,
) -> Option<f64> {
    let latest = latest_observation(observations)?;
    let baseline = first_observation_since(observations, start)?;

    tracing::debug!(
        "Weight change baseline {} kg at {}, latest {} kg at {}",
        baseline.weight_kg,
        baseline.timestamp,
        latest.weight_kg,
        latest.timestamp
    );

    Some(latest.weight_kg - baseline.weight_kg)
}

/// Net weight change over the last `days` days ending at `now`
///
/// A window reaching past the representable date range covers the whole
/// history.
pub fn weight_change_over_days(
    observations: &[WeightObservation],
    now: DateTime<Utc>,
    days: i64,
) -> Option<f64> {
    let start = Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or_else(|| {
            tracing::debug!("Window of {} days out of range, using full history", days);
            DateTime::<Utc>::MIN_UTC
        });

    weight_change_since(observations, start)
}
