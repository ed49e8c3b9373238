use serde::Deserialize;
use serde_json::Value;

use crate::error::AlertQueryError;

/// One active hazard notification. Only the headline is consumed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alert {
    pub headline: Option<String>
}

impl Alert {
    pub fn new(headline: impl Into<String>) -> Self {
        Alert { headline: Some(headline.into()) }
    }

    pub fn without_headline() -> Self {
        Alert { headline: None }
    }

    /// Pulls `properties.headline` out of a GeoJSON feature, tolerating any shape.
    fn from_feature(feature: &Value) -> Self {
        Alert {
            headline: feature.pointer("/properties/headline")
                .and_then(Value::as_str)
                .map(str::to_string)
        }
    }
}

/// Parsed `/alerts/active` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertCollection {
    pub title: String,
    pub alerts: Vec<Alert>
}

#[derive(Deserialize, Debug)]
struct AlertCollectionResponse {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    features: Value
}

impl AlertCollection {
    pub fn new(title: impl Into<String>, alerts: Vec<Alert>) -> Self {
        AlertCollection {
            title: title.into(),
            alerts
        }
    }

    pub fn count(&self) -> usize {
        self.alerts.len()
    }

    /// Parses a response body.
    ///
    /// The body has to be a JSON object. A scalar `title` is rendered as text and a
    /// missing one is empty. A missing or non-array `features` field is read as an
    /// empty collection.
    pub fn from_json(body: &str) -> Result<Self, AlertQueryError> {
        let value: Value = serde_json::from_str(body)?;

        if !value.is_object() {
            return Err(AlertQueryError::MalformedResponse {
                reason: format!("expected a JSON object, got {}", json_type_name(&value))
            });
        }

        let response: AlertCollectionResponse = serde_json::from_value(value)?;

        let title = match response.title {
            Value::Null => String::new(),
            Value::String(title) => title,
            Value::Bool(flag) => flag.to_string(),
            Value::Number(number) => number.to_string(),
            other => return Err(AlertQueryError::MalformedResponse {
                reason: format!("expected a string title, got {}", json_type_name(&other))
            })
        };

        let alerts = match &response.features {
            Value::Array(features) => features.iter().map(Alert::from_feature).collect(),
            _ => Vec::new()
        };

        Ok(AlertCollection {
            title,
            alerts
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object"
    }
}
