use std::cmp::Ordering;

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::utils::date_utils::{date_from_compact, date_from_compact_float, parse_tourney_date};

/// One completed singles match, as handed over by the ingestion step.
///
/// `winner_key` / `loser_key` must already be canonical: the same competitor
/// always maps to the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub tourney_id: String,
    #[serde(default)]
    pub tourney_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tourney_date")]
    pub tourney_date: Option<NaiveDate>,
    #[serde(default)]
    pub tourney_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_match_num")]
    pub match_num: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub round: String,
    #[serde(default)]
    pub surface: Option<String>,
    pub winner_key: String,
    pub loser_key: String,
    /// Display name, as spelled in the source record
    #[serde(default)]
    pub winner_name: Option<String>,
    #[serde(default)]
    pub loser_name: Option<String>
}

impl MatchEvent {
    /// Processing order: `(tourney_date, tourney_id, match_num)` ascending,
    /// unknown dates and match numbers last.
    pub fn chronological_cmp(&self, other: &MatchEvent) -> Ordering {
        nulls_last(&self.tourney_date, &other.tourney_date)
            .then_with(|| self.tourney_id.cmp(&other.tourney_id))
            .then_with(|| nulls_last(&self.match_num, &other.match_num))
    }
}

/// Returns the events in processing order. The sort is stable, so events with
/// identical keys keep their input order.
pub fn chronological_order(events: &[MatchEvent]) -> Vec<&MatchEvent> {
    events.iter().sorted_by(|a, b| a.chronological_cmp(b)).collect()
}

fn nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}

// Exports that went through a float column carry `20000117.0` or `1.0`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny)
}

fn deserialize_tourney_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>
{
    let raw: Option<RawValue> = Option::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawValue::Integer(compact)) => date_from_compact(compact),
        Some(RawValue::Float(compact)) => date_from_compact_float(compact),
        Some(RawValue::Text(text)) => parse_tourney_date(&text),
        Some(RawValue::Other(_)) | None => None
    })
}

/// Integers and integral floats within `i32` range; anything else is unknown.
fn deserialize_match_num<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>
{
    let raw: Option<RawValue> = Option::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawValue::Integer(n)) => i32::try_from(n).ok(),
        Some(RawValue::Float(n)) if n.is_finite() && n.fract() == 0.0 => {
            (n >= i32::MIN as f64 && n <= i32::MAX as f64).then_some(n as i32)
        }
        Some(_) | None => None
    })
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
