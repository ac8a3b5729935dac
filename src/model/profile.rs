//! Profiles (the systems being mapped) and the output record that carries
//! each one's final coordinates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::MAX_DECIMALS;

/// A named entity positioned on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Dimension id → option value token. Kept as raw JSON so the output
    /// document passes it through with its original key order.
    #[serde(default)]
    pub profile: Map<String, Value>,
}

impl Profile {
    /// Build a profile from `(dimension_id, value)` pairs.
    pub fn new(name: &str, description: &str, answers: &[(&str, &str)]) -> Self {
        let profile = answers
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Self {
            name: name.to_string(),
            description: description.to_string(),
            profile,
        }
    }

    /// The value token held on `dimension_id`.
    ///
    /// Non-string JSON values count as absent.
    pub fn answer(&self, dimension_id: &str) -> Option<&str> {
        self.profile.get(dimension_id).and_then(Value::as_str)
    }
}

/// One entry of the output document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub description: String,
    pub profile: Map<String, Value>,
}

impl MapEntry {
    pub fn from_profile(profile: &Profile, x: f64, y: f64) -> Self {
        Self {
            name: profile.name.clone(),
            x,
            y,
            description: profile.description.clone(),
            profile: profile.profile.clone(),
        }
    }

    /// Round both coordinates to `decimals` places, halves toward +∞.
    ///
    /// `decimals` is capped at [`MAX_DECIMALS`]; a coordinate whose scaled
    /// value is not finite is left as is.
    pub fn rounded(mut self, decimals: u32) -> Self {
        self.x = round_to(self.x, decimals);
        self.y = round_to(self.y, decimals);
        self
    }
}

fn round_to(v: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = v * factor;
    if !scaled.is_finite() {
        return v;
    }
    (scaled + 0.5).floor() / factor
}
