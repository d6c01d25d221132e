//! Prediction and selection data types.
//!
//! [`Prediction`] is one geocoding candidate as returned by the places API (or
//! synthesized by the fallback engine). [`SelectedLocation`] is the normalized
//! record handed to the caller when a choice is committed.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of place a prediction refers to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlaceType {
    City,
    State,
    Country,
    Place,
    /// Synthesized locally from free text; never returned by the API
    Custom,
}

/// One candidate location.
///
/// Invariant: a prediction of type [`PlaceType::Custom`] carries no `place_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPrediction")]
pub struct Prediction {
    pub place_id: Option<String>,
    pub osm_id: Option<String>,
    pub description: String,
    pub main_text: String,
    pub secondary_text: Option<String>,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl Prediction {
    /// Builds a prediction from a `"Main, Secondary, ..."` label.
    ///
    /// The text before the first comma becomes `main_text`, the rest becomes
    /// `secondary_text`.
    pub fn from_label(description: &str, place_type: PlaceType) -> Self {
        let (main_text, secondary_text) = split_label(description);
        Prediction {
            place_id: None,
            osm_id: None,
            description: description.to_string(),
            main_text,
            secondary_text,
            place_type,
            lat: None,
            lon: None,
        }
    }

    /// Synthesizes the custom prediction for free text.
    pub fn custom(text: &str) -> Self {
        Prediction {
            place_id: None,
            osm_id: None,
            description: text.to_string(),
            main_text: text.to_string(),
            secondary_text: None,
            place_type: PlaceType::Custom,
            lat: None,
            lon: None,
        }
    }
}

fn split_label(description: &str) -> (String, Option<String>) {
    match description.split_once(',') {
        Some((main, rest)) => {
            let rest = rest.trim();
            (
                main.trim().to_string(),
                (!rest.is_empty()).then(|| rest.to_string()),
            )
        }
        None => (description.trim().to_string(), None),
    }
}

/// Wire shape of a prediction; tolerates numeric ids, missing split labels
/// and unknown types.
#[derive(Deserialize)]
struct RawPrediction {
    #[serde(default, deserialize_with = "string_or_number")]
    place_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    osm_id: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    main_text: Option<String>,
    #[serde(default)]
    secondary_text: Option<String>,
    #[serde(default, rename = "type")]
    place_type: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl From<RawPrediction> for Prediction {
    fn from(raw: RawPrediction) -> Self {
        let (split_main, split_secondary) = split_label(&raw.description);
        let place_type = raw
            .place_type
            .as_deref()
            .and_then(|t| PlaceType::from_str(t).ok())
            .unwrap_or(PlaceType::Place);
        let main_text = raw
            .main_text
            .filter(|t| !t.is_empty())
            .unwrap_or(split_main);
        let secondary_text = match raw.secondary_text {
            Some(text) if !text.is_empty() => Some(text),
            Some(_) => None,
            None => split_secondary,
        };
        Prediction {
            place_id: if place_type == PlaceType::Custom {
                None
            } else {
                raw.place_id
            },
            osm_id: raw.osm_id,
            description: raw.description,
            main_text,
            secondary_text,
            place_type,
            lat: raw.lat,
            lon: raw.lon,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(s)) if !s.is_empty() => Some(s),
        Some(Id::Text(_)) | None => None,
        Some(Id::Number(n)) => Some(n.to_string()),
    })
}

/// Normalized location delivered to `on_select`.
///
/// A prediction commit carries exactly the prediction's fields; a free-text
/// commit carries `description`, `main_text`, `type: "custom"` and
/// `isFreeText: true`. Absent fields are omitted from the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<String>,
    pub description: String,
    pub main_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(rename = "isFreeText", skip_serializing_if = "std::ops::Not::not")]
    pub is_free_text: bool,
}

impl SelectedLocation {
    /// Free-text record for `text`.
    pub fn free_text(text: &str) -> Self {
        SelectedLocation {
            is_free_text: true,
            ..SelectedLocation::from(&Prediction::custom(text))
        }
    }
}

impl From<&Prediction> for SelectedLocation {
    fn from(p: &Prediction) -> Self {
        SelectedLocation {
            place_id: p.place_id.clone(),
            osm_id: p.osm_id.clone(),
            description: p.description.clone(),
            main_text: p.main_text.clone(),
            secondary_text: p.secondary_text.clone(),
            place_type: p.place_type,
            lat: p.lat,
            lon: p.lon,
            is_free_text: false,
        }
    }
}
