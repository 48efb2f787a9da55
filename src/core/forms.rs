//! Form field mapping: extract a name→value map from a set of controls and
//! write such a map back. Controls are matched purely by name; anything the
//! map and the controls disagree on is skipped silently.

use crate::domain::model::{ControlKind, FormControl};
use serde_json::{Map, Number, Value};

/// Builds a name→value map from the controls. Unnamed controls are skipped;
/// on duplicate names the last control wins. Checkboxes yield their checked
/// state, number fields a number (or null when empty), everything else the
/// raw string value.
pub fn get_form_data(controls: &[FormControl]) -> Map<String, Value> {
    let mut data = Map::new();
    for control in controls {
        if control.name.is_empty() {
            continue;
        }
        let value = match control.kind {
            ControlKind::Checkbox => Value::Bool(control.checked),
            ControlKind::Number => parse_number_field(&control.value),
            _ => Value::String(control.value.clone()),
        };
        data.insert(control.name.clone(), value);
    }
    data
}

/// Writes `data` into the controls. For each key the first control with a
/// matching name receives the value; keys without a control are skipped.
/// Checkboxes take the truthiness of the value, other controls its string
/// form (null becomes the empty string).
pub fn set_form_data(controls: &mut [FormControl], data: &Map<String, Value>) {
    for (key, value) in data {
        let Some(control) = controls.iter_mut().find(|c| &c.name == key) else {
            continue;
        };
        if control.kind == ControlKind::Checkbox {
            control.checked = is_truthy(value);
        } else {
            control.value = display_value(value);
        }
    }
}

fn parse_number_field(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }
    // Host number inputs only ever hold numeric text; anything else reads
    // back as null, the same as an empty field.
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Structured values land in text controls as compact JSON.
        other => other.to_string(),
    }
}
