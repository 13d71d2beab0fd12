//! Ready-made rules over [`Value`].
//!
//! Messages are written to follow a field name, so `field("email", email())`
//! reports `"email must be a valid email address"`.

use crate::value::Value;

use super::rule::{Absent, Rule};
use super::validated::Validation;

/// Fails with `"is required"` for `Undefined`, `Null` and `""`.
pub fn required() -> Rule<Value, String> {
    Rule::predicate(|value: &Value| !value.is_absent(), "is required")
}

/// Fails unless the value is a string.
pub fn is_string() -> Rule<Value, String> {
    Rule::predicate(|value: &Value| value.as_str().is_some(), "must be a string")
}

/// Fails unless the value is a number.
pub fn is_number() -> Rule<Value, String> {
    Rule::predicate(|value: &Value| value.as_f64().is_some(), "must be a number")
}

/// Length in characters for strings, in elements for arrays.
fn length_of(value: &Value) -> Option<usize> {
    value
        .as_str()
        .map(|text| text.chars().count())
        .or_else(|| value.as_array().map(<[Value]>::len))
}

/// Strings and arrays shorter than `minimum` fail; other values pass through.
pub fn min_length(minimum: usize) -> Rule<Value, String> {
    Rule::predicate(
        move |value: &Value| length_of(value).is_none_or(|length| length >= minimum),
        format!("must be at least {minimum} characters"),
    )
}

/// Strings and arrays longer than `maximum` fail; other values pass through.
pub fn max_length(maximum: usize) -> Rule<Value, String> {
    Rule::predicate(
        move |value: &Value| length_of(value).is_none_or(|length| length <= maximum),
        format!("must be at most {maximum} characters"),
    )
}

/// Numbers outside `minimum..=maximum` fail, as does anything not a number.
pub fn range(minimum: f64, maximum: f64) -> Rule<Value, String> {
    Rule::new(move |value: &Value| match value.as_f64() {
        Some(number) if (minimum..=maximum).contains(&number) => Validation::success(value.clone()),
        Some(_) => Validation::failure(format!("must be between {minimum} and {maximum}")),
        None => Validation::failure("must be a number".to_string()),
    })
}

/// A deliberately small address check: `local@domain.tld`, no whitespace.
fn looks_like_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !text.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(name, _)| !name.is_empty())
        && !domain.ends_with('.')
}

/// Fails unless the value is a string shaped like an email address.
pub fn email() -> Rule<Value, String> {
    Rule::predicate(
        |value: &Value| value.as_str().is_some_and(looks_like_email),
        "must be a valid email address",
    )
}

/// Fails unless the value equals one of `allowed`.
pub fn one_of<I, V>(allowed: I) -> Rule<Value, String>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    let message = format!(
        "must be one of {}",
        allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Rule::predicate(move |value: &Value| allowed.contains(value), message)
}
