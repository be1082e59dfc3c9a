use serde_json::Value;
use thiserror::Error;

/// Errors produced when an untrusted value fails shape validation.
///
/// Validation failures are deterministic, never transient. There is no retry
/// policy; the caller decides whether to reject the request, prompt for
/// corrected input, or abort the wallet operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape mismatch at field `{field}`: expected {expected}, found {found}")]
    Mismatch {
        field: String,
        expected: &'static str,
        found: String,
    },
}

impl ShapeError {
    /// A mismatch on `field`, rendering the offending value into a short
    /// description of what was actually found.
    pub fn mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: Option<&Value>,
    ) -> Self {
        Self::Mismatch {
            field: field.into(),
            expected,
            found: describe(found),
        }
    }

    /// The offending field name.
    pub fn field(&self) -> &str {
        match self {
            Self::Mismatch { field, .. } => field,
        }
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "absent".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(_)) => "a boolean".to_string(),
        Some(Value::Number(_)) => "a number".to_string(),
        Some(Value::String(s)) => format!("string {s:?}"),
        Some(Value::Array(_)) => "an array".to_string(),
        Some(Value::Object(_)) => "an object".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn mismatch_names_the_offending_field() {
        let error = ShapeError::mismatch("secretKey", "a string", None);
        assert_eq!(error.field(), "secretKey");
        assert_eq!(
            error.to_string(),
            "shape mismatch at field `secretKey`: expected a string, found absent"
        );
    }

    #[test]
    fn found_values_render_by_kind() {
        let cases = [
            (Some(json!(null)), "null"),
            (Some(json!(42)), "a number"),
            (Some(json!({})), "an object"),
            (None, "absent"),
        ];
        for (value, rendered) in cases {
            let error = ShapeError::mismatch("type", "a string", value.as_ref());
            assert!(error.to_string().ends_with(&format!("found {rendered}")));
        }
    }
}
