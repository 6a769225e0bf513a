//! Forgiving field deserialisers for heterogeneous dataset rows.
//!
//! Dataset exports mix numbers, numeric strings, blanks and nulls in the same
//! column. These helpers never fail: anything unusable becomes `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a number or numeric string; blanks, nulls and junk become `None`.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

/// Accept any scalar or embedded JSON as text; blanks and nulls become `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value))
}

/// Like [`optional_text`] but defaults to an empty string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn text_from_value(value: &Value) -> Option<String> {
    let raw = match value {
        Value::Null => return None,
        Value::String(raw) => raw.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    };
    if raw.is_empty() { None } else { Some(raw) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(2500), Some(2500.0))]
    #[case(json!("1800.5"), Some(1800.5))]
    #[case(json!(" 42 "), Some(42.0))]
    #[case(json!(""), None)]
    #[case(json!(null), None)]
    #[case(json!("n/a"), None)]
    #[case(json!("NaN"), None)]
    #[case(json!([1, 2]), None)]
    fn numbers_degrade_to_none(#[case] value: Value, #[case] expected: Option<f64>) {
        assert_eq!(number_from_value(&value), expected);
    }

    #[rstest]
    #[case(json!("  Pool | Spa "), Some("Pool | Spa"))]
    #[case(json!(4), Some("4"))]
    #[case(json!("   "), None)]
    #[case(json!(null), None)]
    #[case(json!({"booking": 8}), Some(r#"{"booking":8}"#))]
    fn text_accepts_scalars_and_embedded_json(
        #[case] value: Value,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(text_from_value(&value).as_deref(), expected);
    }
}
