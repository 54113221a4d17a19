use serde::{Serialize, Deserialize, Serializer, Deserializer};
use serde_json::Value;
use kurbo::Point;
use crate::color::Color;
use crate::error::WaveError;
use crate::number::{coerce_number, js_number};

pub const NUMERIC_FIELDS: [&str; 6] = ["width", "height", "offset", "amplitude", "frequency", "rotate"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    #[serde(with = "js_number")]
    pub width: f64,     // px
    #[serde(with = "js_number")]
    pub height: f64,    // px
    #[serde(with = "js_number")]
    pub offset: f64,    // px from the top edge
    #[serde(with = "js_number")]
    pub amplitude: f64, // px
    #[serde(with = "js_number")]
    pub frequency: f64, // cycles across the width
    #[serde(with = "js_number")]
    pub rotate: f64,    // deg, clockwise
    pub color: String,
}

impl Default for WaveConfig {
    fn default() -> Self {
        WaveConfig {
            width: 500.0,
            height: 200.0,
            offset: 50.0,
            amplitude: 30.0,
            frequency: 1.0,
            rotate: 180.0,
            color: "#2386be".to_string(),
        }
    }
}

impl WaveConfig {
    pub fn number(&self, field: &str) -> Option<f64> {
        match field {
            "width" => Some(self.width),
            "height" => Some(self.height),
            "offset" => Some(self.offset),
            "amplitude" => Some(self.amplitude),
            "frequency" => Some(self.frequency),
            "rotate" => Some(self.rotate),
            _ => None,
        }
    }

    pub fn set_number(&mut self, field: &str, value: f64) -> Result<(), WaveError> {
        let slot = match field {
            "width" => &mut self.width,
            "height" => &mut self.height,
            "offset" => &mut self.offset,
            "amplitude" => &mut self.amplitude,
            "frequency" => &mut self.frequency,
            "rotate" => &mut self.rotate,
            _ => return Err(WaveError::UnknownField(field.to_string())),
        };
        *slot = value;
        Ok(())
    }

    /// Merges a partial JSON object into the config.
    ///
    /// Numeric fields take either a JSON number or text, which is coerced the
    /// same way form input is. `color` takes a string. On error the config is
    /// left untouched.
    pub fn apply_json(&mut self, patch: &Value) -> Result<(), WaveError> {
        let mut updated = self.clone();
        updated.merge_fields(patch)?;
        *self = updated;
        Ok(())
    }

    fn merge_fields(&mut self, patch: &Value) -> Result<(), WaveError> {
        let fields = patch.as_object().ok_or_else(|| WaveError::InvalidValue {
            field: "<root>".to_string(),
            expected: "an object",
        })?;

        for (key, value) in fields {
            if key == "color" {
                self.color = value.as_str().ok_or_else(|| WaveError::InvalidValue {
                    field: key.clone(),
                    expected: "a string",
                })?.to_string();
                continue;
            }
            let number = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => Some(coerce_number(s)),
                _ => None,
            };
            let number = number.ok_or_else(|| WaveError::InvalidValue {
                field: key.clone(),
                expected: "a number",
            })?;
            self.set_number(key, number)?;
        }
        Ok(())
    }

    /// Rejects values that make the sampling arithmetic degenerate.
    pub fn validate(&self) -> Result<(), WaveError> {
        for field in NUMERIC_FIELDS {
            let value = self.number(field).unwrap_or(f64::NAN);
            if !value.is_finite() {
                return Err(WaveError::InvalidConfiguration { field, value });
            }
        }
        if self.width <= 0.0 {
            return Err(WaveError::InvalidConfiguration { field: "width", value: self.width });
        }
        if self.height <= 0.0 {
            return Err(WaveError::InvalidConfiguration { field: "height", value: self.height });
        }
        if self.frequency == 0.0 {
            return Err(WaveError::InvalidConfiguration { field: "frequency", value: self.frequency });
        }
        Color::parse(&self.color)?;
        Ok(())
    }
}

/// Output of one sampling pass. Vertices are in percent of the container.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PolygonResult {
    #[serde(with = "vertex_list")]
    pub vertices: Vec<Point>,
    pub polygon: String,
    pub css_block: String,
}

// `{x, y}` objects whose coordinates may be NaN or infinite.
mod vertex_list {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Vertex {
        #[serde(with = "js_number")]
        x: f64,
        #[serde(with = "js_number")]
        y: f64,
    }

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(points.iter().map(|p| Vertex { x: p.x, y: p.y }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let vertices = Vec::<Vertex>::deserialize(deserializer)?;
        Ok(vertices.into_iter().map(|v| Point::new(v.x, v.y)).collect())
    }
}
