//! Typed access to raw JSON record fields
//!
//! Trials and patients keep the object they were loaded from, key order and
//! number tokens included, so records are written back exactly as read. The
//! helpers here check the fields the evaluator reads when a record is loaded,
//! and read them back without copying.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// A known field holding a value of the wrong JSON type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{field}` must be {expected} or null, found {found}")]
pub struct FieldTypeError {
    pub field: &'static str,
    pub expected: &'static str,
    pub found: &'static str,
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Require `field` to be absent, null or a number
pub fn expect_number(fields: &Map<String, Value>, field: &'static str) -> Result<(), FieldTypeError> {
    match fields.get(field) {
        None | Some(Value::Null | Value::Number(_)) => Ok(()),
        Some(other) => Err(FieldTypeError {
            field,
            expected: "a number",
            found: type_name(other),
        }),
    }
}

/// Require `field` to be absent, null or a boolean
pub fn expect_flag(fields: &Map<String, Value>, field: &'static str) -> Result<(), FieldTypeError> {
    match fields.get(field) {
        None | Some(Value::Null | Value::Bool(_)) => Ok(()),
        Some(other) => Err(FieldTypeError {
            field,
            expected: "a boolean",
            found: type_name(other),
        }),
    }
}

/// The number stored under `field`; absent and null both read as `None`
#[must_use]
pub fn number_field<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Number> {
    match fields.get(field) {
        Some(Value::Number(n)) => Some(n),
        _ => None,
    }
}

/// The flag stored under `field`; absent and null both read as `false`
#[must_use]
pub fn flag_field(fields: &Map<String, Value>, field: &str) -> bool {
    matches!(fields.get(field), Some(Value::Bool(true)))
}

/// Values the model builders accept for numeric fields
///
/// Integers are stored as integers and floats as floats, so they print the
/// same way a loaded record would. Non-finite floats are stored as null.
pub trait IntoNumber {
    fn into_number(self) -> Value;
}

macro_rules! impl_into_number {
    ($($ty:ty),*) => {
        $(
            impl IntoNumber for $ty {
                fn into_number(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_into_number!(i32, i64, u32, u64, f64);
