//! Normalization of the 4-day weather forecast payload.
//!
//! The vendor does not guarantee the payload shape, and field names have
//! shifted between revisions. Each reading is resolved through an ordered
//! chain of extractors: the nested path first, then the flattened alternate,
//! and finally an explicit unknown sentinel. A day that cannot be dated at
//! all becomes a placeholder entry so the rest of the sequence still renders.
use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Raw response of the 4-day forecast endpoint, parsed leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForecastResponse {
    #[serde(default)]
    pub items: Vec<RawForecastItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForecastItem {
    #[serde(default)]
    pub update_timestamp: Option<String>,
    #[serde(default)]
    pub forecasts: Vec<RawDayForecast>,
}

/// One forecast day as the vendor sends it. Every field is optional; the
/// flattened `*_max`/`*_min` fields are the alternates some payload
/// revisions carry instead of the nested objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDayForecast {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub temperature: Option<RawRange>,
    #[serde(default)]
    pub temperature_2m_max: Option<f64>,
    #[serde(default)]
    pub temperature_2m_min: Option<f64>,
    #[serde(default)]
    pub relative_humidity: Option<RawRange>,
    #[serde(default)]
    pub relative_humidity_2m_max: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m_min: Option<f64>,
    #[serde(default)]
    pub wind: Option<RawWind>,
    #[serde(default)]
    pub wind_speed_10m_max: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m_min: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRange {
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWind {
    #[serde(default)]
    pub speed: Option<RawRange>,
    #[serde(default)]
    pub direction: Option<String>,
}

/// A numeric reading that may be missing from the payload entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Reading {
    Value(f64),
    Unknown,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Fixed icon taxonomy the UI renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconCategory {
    Storm,
    Rain,
    Cloud,
    Sun,
    Haze,
    Wind,
    Partly,
}

// First match wins, so a "Thundery Showers" day is a storm, not rain, and a
// condition naming both cloud and rain resolves to rain.
const ICON_RULES: &[(&[&str], IconCategory)] = &[
    (&["thunder", "lightning"], IconCategory::Storm),
    (&["rain", "showers"], IconCategory::Rain),
    (&["cloudy", "overcast"], IconCategory::Cloud),
    (&["sunny", "clear"], IconCategory::Sun),
    (&["haze"], IconCategory::Haze),
    (&["wind"], IconCategory::Wind),
];

/// Map free-text condition wording onto the icon taxonomy.
#[must_use]
pub fn icon_for_condition(text: &str) -> IconCategory {
    let text = text.to_lowercase();
    for (needles, icon) in ICON_RULES {
        if needles.iter().any(|needle| text.contains(needle)) {
            return *icon;
        }
    }
    IconCategory::Partly
}

/// One renderable forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Short date label such as `Fri 28 Nov`.
    pub label: String,
    pub condition: String,
    pub icon: IconCategory,
    pub temp_high: Reading,
    pub temp_low: Reading,
    pub humidity_high: Reading,
    pub humidity_low: Reading,
    pub wind_speed_high: Reading,
    pub wind_speed_low: Reading,
    pub wind_direction: String,
}

/// A slot in the normalized sequence. Days that fail to normalize keep
/// their position as placeholders rather than aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ForecastEntry {
    Day(Box<ForecastDay>),
    Unavailable { index: usize },
}

type Extractor = fn(&RawDayForecast) -> Option<f64>;

const TEMP_HIGH: &[Extractor] = &[
    |d| d.temperature.as_ref().and_then(|r| r.high),
    |d| d.temperature_2m_max,
];
const TEMP_LOW: &[Extractor] = &[
    |d| d.temperature.as_ref().and_then(|r| r.low),
    |d| d.temperature_2m_min,
];
const HUMIDITY_HIGH: &[Extractor] = &[
    |d| d.relative_humidity.as_ref().and_then(|r| r.high),
    |d| d.relative_humidity_2m_max,
];
const HUMIDITY_LOW: &[Extractor] = &[
    |d| d.relative_humidity.as_ref().and_then(|r| r.low),
    |d| d.relative_humidity_2m_min,
];
const WIND_SPEED_HIGH: &[Extractor] = &[
    |d| d.wind.as_ref().and_then(|w| w.speed.as_ref()).and_then(|r| r.high),
    |d| d.wind_speed_10m_max,
];
const WIND_SPEED_LOW: &[Extractor] = &[
    |d| d.wind.as_ref().and_then(|w| w.speed.as_ref()).and_then(|r| r.low),
    |d| d.wind_speed_10m_min,
];
const WIND_DIRECTION: &[fn(&RawDayForecast) -> Option<String>] = &[
    |d| d.wind.as_ref().and_then(|w| w.direction.clone()),
    |d| d.wind_direction.clone(),
];

fn first_of(day: &RawDayForecast, chain: &[Extractor]) -> Reading {
    chain
        .iter()
        .find_map(|extract| extract(day))
        .map_or(Reading::Unknown, Reading::Value)
}

/// Convert a raw payload into the display sequence.
///
/// An absent or empty forecast array yields an empty vector; the caller
/// renders that as a "no data" state. The output always has one entry per
/// input day.
#[must_use]
pub fn normalize(raw: &RawForecastResponse) -> Vec<ForecastEntry> {
    let Some(item) = raw.items.first() else {
        return Vec::new();
    };
    item.forecasts
        .iter()
        .enumerate()
        .map(|(index, day)| {
            day_label(day).map_or(ForecastEntry::Unavailable { index }, |label| {
                let condition = day
                    .forecast
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string());
                ForecastEntry::Day(Box::new(ForecastDay {
                    icon: icon_for_condition(&condition),
                    label,
                    condition,
                    temp_high: first_of(day, TEMP_HIGH),
                    temp_low: first_of(day, TEMP_LOW),
                    humidity_high: first_of(day, HUMIDITY_HIGH),
                    humidity_low: first_of(day, HUMIDITY_LOW),
                    wind_speed_high: first_of(day, WIND_SPEED_HIGH),
                    wind_speed_low: first_of(day, WIND_SPEED_LOW),
                    wind_direction: WIND_DIRECTION
                        .iter()
                        .find_map(|extract| extract(day))
                        .unwrap_or_else(|| "unknown".to_string()),
                }))
            })
        })
        .collect()
}

/// Display label for the payload's update timestamp, when present and valid.
#[must_use]
pub fn updated_label(raw: &RawForecastResponse) -> Option<String> {
    let stamp = raw.items.first()?.update_timestamp.as_deref()?;
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|dt| dt.format("%-d %b %Y, %H:%M").to_string())
}

fn day_label(day: &RawDayForecast) -> Option<String> {
    day.timestamp
        .as_deref()
        .and_then(parse_day)
        .or_else(|| day.date.as_deref().and_then(parse_day))
        .map(|date| date.format("%a %-d %b").to_string())
}

fn parse_day(stamp: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(stamp)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(stamp, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> RawForecastResponse {
        serde_json::from_value(value).expect("raw payload parses")
    }

    fn nea_day(timestamp: &str, forecast: &str) -> serde_json::Value {
        json!({
            "timestamp": timestamp,
            "forecast": forecast,
            "temperature": {"low": 25, "high": 33},
            "relative_humidity": {"low": 55, "high": 95},
            "wind": {"speed": {"low": 10, "high": 20}, "direction": "NNE"}
        })
    }

    #[test]
    fn empty_object_normalizes_to_empty_sequence() {
        assert!(normalize(&parse(json!({}))).is_empty());
    }

    #[test]
    fn empty_items_normalize_to_empty_sequence() {
        assert!(normalize(&parse(json!({"items": []}))).is_empty());
        assert!(normalize(&parse(json!({"items": [{"forecasts": []}]}))).is_empty());
    }

    #[test]
    fn well_formed_day_extracts_nested_fields() {
        let raw = parse(json!({"items": [{"forecasts": [nea_day("2025-11-28T00:00:00+08:00", "Thundery Showers")]}]}));
        let entries = normalize(&raw);
        assert_eq!(entries.len(), 1);
        let ForecastEntry::Day(day) = &entries[0] else {
            panic!("expected a day entry");
        };
        assert_eq!(day.label, "Fri 28 Nov");
        assert_eq!(day.temp_high, Reading::Value(33.0));
        assert_eq!(day.temp_low, Reading::Value(25.0));
        assert_eq!(day.humidity_high, Reading::Value(95.0));
        assert_eq!(day.wind_speed_low, Reading::Value(10.0));
        assert_eq!(day.wind_direction, "NNE");
    }

    #[test]
    fn flattened_alternates_fill_in_for_missing_nested_fields() {
        let raw = parse(json!({"items": [{"forecasts": [{
            "date": "2025-11-29",
            "forecast": "Fair",
            "temperature_2m_max": 32.0,
            "temperature_2m_min": 24.0,
            "relative_humidity_2m_max": 90.0,
            "relative_humidity_2m_min": 60.0,
            "wind_speed_10m_max": 18.0,
            "wind_speed_10m_min": 8.0,
            "wind_direction": "SSW"
        }]}]}));
        let entries = normalize(&raw);
        let ForecastEntry::Day(day) = &entries[0] else {
            panic!("expected a day entry");
        };
        assert_eq!(day.temp_high, Reading::Value(32.0));
        assert_eq!(day.humidity_low, Reading::Value(60.0));
        assert_eq!(day.wind_speed_high, Reading::Value(18.0));
        assert_eq!(day.wind_direction, "SSW");
    }

    #[test]
    fn nested_path_wins_over_flattened_alternate() {
        let raw = parse(json!({"items": [{"forecasts": [{
            "date": "2025-11-29",
            "forecast": "Fair",
            "temperature": {"high": 31.0},
            "temperature_2m_max": 99.0
        }]}]}));
        let ForecastEntry::Day(day) = &normalize(&raw)[0] else {
            panic!("expected a day entry");
        };
        assert_eq!(day.temp_high, Reading::Value(31.0));
    }

    #[test]
    fn missing_everything_falls_back_to_unknown() {
        let raw = parse(json!({"items": [{"forecasts": [{"date": "2025-11-29"}]}]}));
        let ForecastEntry::Day(day) = &normalize(&raw)[0] else {
            panic!("expected a day entry");
        };
        assert_eq!(day.temp_high, Reading::Unknown);
        assert_eq!(day.humidity_low, Reading::Unknown);
        assert_eq!(day.wind_speed_high, Reading::Unknown);
        assert_eq!(day.wind_direction, "unknown");
        assert_eq!(day.condition, "Unknown");
        assert_eq!(day.temp_high.to_string(), "unknown");
    }

    #[test]
    fn malformed_day_becomes_placeholder_without_aborting_sequence() {
        let raw = parse(json!({"items": [{"forecasts": [
            nea_day("2025-11-28T00:00:00+08:00", "Fair"),
            {"timestamp": "late november, probably", "forecast": "Fair"},
            nea_day("2025-11-30T00:00:00+08:00", "Cloudy"),
        ]}]}));
        let entries = normalize(&raw);
        assert_eq!(entries.len(), 3);
        assert!(matches!(entries[0], ForecastEntry::Day(_)));
        assert_eq!(entries[1], ForecastEntry::Unavailable { index: 1 });
        assert!(matches!(entries[2], ForecastEntry::Day(_)));
    }

    #[test]
    fn thundery_showers_map_to_storm_before_rain() {
        assert_eq!(icon_for_condition("Thundery Showers"), IconCategory::Storm);
    }

    #[test]
    fn rain_is_tested_before_cloud() {
        assert_eq!(
            icon_for_condition("Cloudy with passing rain"),
            IconCategory::Rain
        );
    }

    #[test]
    fn icon_mapping_covers_the_fixed_order() {
        assert_eq!(icon_for_condition("Heavy Showers"), IconCategory::Rain);
        assert_eq!(icon_for_condition("Partly Cloudy (Day)"), IconCategory::Cloud);
        assert_eq!(icon_for_condition("Sunny spells"), IconCategory::Sun);
        assert_eq!(icon_for_condition("Slightly Hazy"), IconCategory::Haze);
        assert_eq!(icon_for_condition("Windy"), IconCategory::Wind);
        assert_eq!(icon_for_condition("Mild"), IconCategory::Partly);
    }

    #[test]
    fn update_timestamp_renders_when_valid() {
        let raw = parse(json!({"items": [{
            "update_timestamp": "2025-11-28T06:05:00+08:00",
            "forecasts": []
        }]}));
        assert_eq!(updated_label(&raw).as_deref(), Some("28 Nov 2025, 06:05"));
        assert!(updated_label(&parse(json!({}))).is_none());
    }
}
