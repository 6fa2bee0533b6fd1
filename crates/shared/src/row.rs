//! Cell readers for loosely typed catalog rows.
//!
//! Catalog stores hand rows over as key/value maps where numbers may arrive
//! as JSON numbers or as decimal strings. These helpers turn a single cell into
//! a typed value or a [`crate::Error::InvalidRecord`]; nothing is coerced to
//! zero.

use serde_json::Value;

use crate::Error;

/// Reads a required numeric cell.
pub fn required_number(value: Option<&Value>, field: &str) -> crate::Result<f64> {
    let number = match value {
        None | Some(Value::Null) => {
            return Err(Error::InvalidRecord(format!("missing numeric field `{field}`")));
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(Error::InvalidRecord(format!(
            "field `{field}` is not a finite number: {}",
            value.map(Value::to_string).unwrap_or_default()
        ))),
    }
}

/// Reads an optional text cell, trimming it. Numbers are rendered as text.
pub fn optional_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    (!text.is_empty()).then_some(text)
}

/// Reads a list cell: a JSON array, a string holding a JSON array, or a
/// comma separated string. Items are trimmed and empty items dropped.
pub fn text_list(value: Option<&Value>) -> Vec<String> {
    let items: Vec<String> = match value {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| optional_text(Some(v)))
            .collect(),
        Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(values)) => values
                .iter()
                .filter_map(|v| optional_text(Some(v)))
                .collect(),
            Ok(Value::String(inner)) => split_commas(&inner),
            _ => split_commas(s),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

fn split_commas(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
