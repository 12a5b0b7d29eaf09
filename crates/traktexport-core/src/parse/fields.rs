use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use crate::error::ParseError;
use super::datetime::parse_trakt_datetime;

pub(crate) type Object = Map<String, Value>;

pub(crate) fn as_object<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Object, ParseError> {
    value.as_object().ok_or(ParseError::NotAnObject { context })
}

pub(crate) fn field<'a>(
    obj: &'a Object,
    key: &'static str,
    context: &'static str,
) -> Result<&'a Value, ParseError> {
    obj.get(key).ok_or(ParseError::MissingRequiredField { field: key, context })
}

fn invalid(key: &'static str, expected: &'static str, context: &'static str) -> ParseError {
    ParseError::InvalidFieldType { field: key, expected, context }
}

pub(crate) fn object<'a>(
    obj: &'a Object,
    key: &'static str,
    context: &'static str,
) -> Result<&'a Object, ParseError> {
    field(obj, key, context)?
        .as_object()
        .ok_or_else(|| invalid(key, "an object", context))
}

pub(crate) fn array<'a>(
    obj: &'a Object,
    key: &'static str,
    context: &'static str,
) -> Result<&'a [Value], ParseError> {
    field(obj, key, context)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid(key, "an array", context))
}

pub(crate) fn str_ref<'a>(
    obj: &'a Object,
    key: &'static str,
    context: &'static str,
) -> Result<&'a str, ParseError> {
    field(obj, key, context)?
        .as_str()
        .ok_or_else(|| invalid(key, "a string", context))
}

pub(crate) fn string(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<String, ParseError> {
    str_ref(obj, key, context).map(str::to_string)
}

/// Key must be present, `null` becomes `None`
pub(crate) fn nullable_string(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<Option<String>, ParseError> {
    match field(obj, key, context)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(invalid(key, "a string", context)),
    }
}

/// Key may be absent or `null`
pub(crate) fn optional_string(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<Option<String>, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(key, "a string", context)),
    }
}

fn to_uint<T: TryFrom<u64>>(
    value: &Value,
    key: &'static str,
    context: &'static str,
) -> Result<T, ParseError> {
    value
        .as_u64()
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| invalid(key, "a non-negative integer in range", context))
}

pub(crate) fn uint<T: TryFrom<u64>>(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<T, ParseError> {
    to_uint(field(obj, key, context)?, key, context)
}

pub(crate) fn nullable_uint<T: TryFrom<u64>>(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<Option<T>, ParseError> {
    match field(obj, key, context)? {
        Value::Null => Ok(None),
        value => to_uint(value, key, context).map(Some),
    }
}

pub(crate) fn optional_uint<T: TryFrom<u64>>(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<Option<T>, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => to_uint(value, key, context).map(Some),
    }
}

pub(crate) fn timestamp(
    obj: &Object,
    key: &'static str,
    context: &'static str,
) -> Result<DateTime<Utc>, ParseError> {
    parse_trakt_datetime(str_ref(obj, key, context)?)
}

/// `user.username`, shared by follows, comments and lists
pub(crate) fn username(obj: &Object, context: &'static str) -> Result<String, ParseError> {
    string(object(obj, "user", context)?, "username", context)
}
