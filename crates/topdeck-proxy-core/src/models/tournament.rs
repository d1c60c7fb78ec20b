use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One upstream tournament record.
///
/// Fields are kept as-is (in upstream order) so the proxy forwards
/// everything it was given; only the pipeline adds `data.participants` and
/// `standings[].commanders`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tournament(Map<String, Value>);

impl Tournament {
    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Nested `data` object, if present and an object.
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.0.get("data").and_then(Value::as_object)
    }

    /// Display name: `data.name`, else legacy `tournamentName`, else "".
    pub fn name(&self) -> &str {
        self.data()
            .and_then(|data| non_empty_str(data.get("name")))
            .or_else(|| non_empty_str(self.0.get("tournamentName")))
            .unwrap_or("")
    }

    /// Start time in epoch seconds: `data.startDate`, else legacy
    /// `startDate`, else 0.
    pub fn start_date(&self) -> f64 {
        self.data()
            .and_then(|data| non_zero_number(data.get("startDate")))
            .or_else(|| non_zero_number(self.0.get("startDate")))
            .unwrap_or(0.0)
    }

    /// Standings entries; empty if absent or not a sequence.
    pub fn standings(&self) -> &[Value] {
        self.0
            .get("standings")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `data.participants` as set by the pipeline; 0 if missing.
    pub fn participants(&self) -> u64 {
        self.data()
            .and_then(|data| data.get("participants"))
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    /// Case-insensitive substring match on the display name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name().to_lowercase().contains(&needle.to_lowercase())
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn non_zero_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| *n != 0.0)
}
