//! Rules and the combinators that build composite validators from them.
//!
//! A [`Rule`] is a cloneable `Fn(&T) -> Validation<E, T>`. The combinators
//! here never stop at the first failure: every rule, field and element runs,
//! and the errors come back in declaration order.

use std::fmt;
use std::sync::Arc;

use crate::control::Maybe;
use crate::typeclass::Semigroup;
use crate::value::{Map, UNDEFINED, Value};

use super::errors::ValidationErrors;
use super::validated::Validation;

type RuleFn<T, E> = dyn Fn(&T) -> Validation<E, T> + Send + Sync;

/// A reusable check from `T` to `Validation<E, T>`.
///
/// A rule may return a different value than it was given (trimming a string,
/// for example); the composite combinators carry the returned value forward.
///
/// # Examples
///
/// ```rust
/// use funkit::validation::Rule;
///
/// let positive: Rule<i32, String> = Rule::predicate(|n: &i32| *n > 0, "must be positive");
/// assert!(positive.check(&3).is_valid());
/// assert!(positive.check(&-3).is_invalid());
/// ```
pub struct Rule<T, E> {
    check: Arc<RuleFn<T, E>>,
}

impl<T, E> Rule<T, E> {
    /// Wraps a validation function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> Validation<E, T> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Runs the rule.
    #[inline]
    pub fn check(&self, value: &T) -> Validation<E, T> {
        (self.check)(value)
    }

    /// Transforms every error the rule produces.
    pub fn map_errors<E2, F>(self, function: F) -> Rule<T, E2>
    where
        T: 'static,
        E: 'static,
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        Rule::new(move |value| self.check(value).map_errors(&function))
    }
}

impl<T: Clone, E: Clone> Rule<T, E> {
    /// Passes the value through unchanged when `predicate` holds.
    pub fn predicate<P>(predicate: P, error: impl Into<E>) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        let error = error.into();
        Self::new(move |value| {
            if predicate(value) {
                Validation::success(value.clone())
            } else {
                Validation::failure(error.clone())
            }
        })
    }
}

impl<T, E> Clone for Rule<T, E> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T, E> fmt::Debug for Rule<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Rule").finish_non_exhaustive()
    }
}

// =============================================================================
// Absence
// =============================================================================

/// Values that [`optional`] treats as "not provided".
pub trait Absent {
    /// Returns `true` when the value counts as missing.
    fn is_absent(&self) -> bool;
}

impl Absent for Value {
    /// `Undefined`, `Null` and the empty string.
    fn is_absent(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => true,
            Self::String(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Absent for Maybe<T> {
    fn is_absent(&self) -> bool {
        self.is_nothing()
    }
}

impl Absent for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Absent for &str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Prefixes every error of `rule` with a field name: `"{name} {message}"`.
///
/// ```rust
/// use funkit::validation::{Rule, field};
///
/// let rule = field("age", Rule::predicate(|n: &u32| *n >= 18, "must be an adult"));
/// let errors = rule.check(&4).get().unwrap_err();
/// assert_eq!(errors.first(), "age must be an adult");
/// ```
pub fn field<T>(name: impl Into<String>, rule: Rule<T, String>) -> Rule<T, String>
where
    T: 'static,
{
    let name = name.into();
    rule.map_errors(move |message| annotate(&name, message))
}

// Messages `array_of` already produced for this field (`"{name}[{i}]: ..."`
// and `"{name} must be an array"`) are left as they are.
fn annotate(name: &str, message: String) -> String {
    if message
        .strip_prefix(name)
        .is_some_and(|rest| rest.starts_with('[') || rest == NOT_AN_ARRAY)
    {
        message
    } else {
        format!("{name} {message}")
    }
}

/// Runs every rule; valid only when all of them are.
///
/// The value returned on success is the input, not any rule's output. On
/// failure the errors of every failing rule are concatenated in order. An
/// empty rule list accepts everything.
pub fn all<T, E, I>(rules: I) -> Rule<T, E>
where
    T: Clone + 'static,
    E: 'static,
    I: IntoIterator<Item = Rule<T, E>>,
{
    let rules: Vec<Rule<T, E>> = rules.into_iter().collect();
    Rule::new(move |value: &T| {
        rules
            .iter()
            .fold(Validation::success(value.clone()), |accumulated, rule| {
                accumulated.and(rule.check(value))
            })
    })
}

/// Valid as soon as one rule is; otherwise every rule's errors, in order.
///
/// An empty rule list accepts everything.
pub fn any<T, E, I>(rules: I) -> Rule<T, E>
where
    T: Clone + 'static,
    E: 'static,
    I: IntoIterator<Item = Rule<T, E>>,
{
    let rules: Vec<Rule<T, E>> = rules.into_iter().collect();
    Rule::new(move |value: &T| {
        let mut failures: Option<ValidationErrors<E>> = None;
        for rule in &rules {
            match rule.check(value) {
                Validation::Valid(_) => return Validation::success(value.clone()),
                Validation::Invalid(errors) => {
                    failures = Some(match failures.take() {
                        Some(existing) => existing.combine(errors),
                        None => errors,
                    });
                }
            }
        }
        failures.map_or_else(|| Validation::success(value.clone()), Validation::failures)
    })
}

/// Skips `rule` for absent values, which pass unchanged.
pub fn optional<T, E>(rule: Rule<T, E>) -> Rule<T, E>
where
    T: Absent + Clone + 'static,
    E: 'static,
{
    Rule::new(move |value: &T| {
        if value.is_absent() {
            Validation::success(value.clone())
        } else {
            rule.check(value)
        }
    })
}

/// Validates the named fields of an object.
///
/// Each rule sees `object[name]`, or `Undefined` when the field is missing,
/// and its errors are prefixed with the field name. Every field is checked.
/// On success the result holds only the validated fields, with the values
/// their rules returned; fields whose result is `Undefined` are left out.
/// A non-object input fails with `"value must be an object"`.
///
/// # Examples
///
/// ```rust
/// use funkit::validation::{all, object, rules};
/// use funkit::value::Value;
///
/// let person = object([
///     ("name", all([rules::required()])),
///     ("email", all([rules::required(), rules::email()])),
/// ]);
///
/// let form = Value::object([("name", ""), ("email", "bad")]);
/// let errors = person.check(&form).get().unwrap_err();
/// assert_eq!(
///     errors.into_vec(),
///     vec!["name is required", "email must be a valid email address"]
/// );
/// ```
pub fn object<I, K>(fields: I) -> Rule<Value, String>
where
    I: IntoIterator<Item = (K, Rule<Value, String>)>,
    K: Into<String>,
{
    let fields: Vec<(String, Rule<Value, String>)> = fields
        .into_iter()
        .map(|(name, rule)| (name.into(), rule))
        .collect();

    Rule::new(move |value: &Value| {
        let Some(entries) = value.as_object() else {
            return Validation::failure("value must be an object".to_string());
        };

        fields
            .iter()
            .map(|(name, rule)| {
                let current = entries.get(name).unwrap_or(&UNDEFINED);
                rule.check(current)
                    .map(|validated| (name.clone(), validated))
                    .map_errors(|message| annotate(name, message))
            })
            .collect::<Validation<String, Vec<(String, Value)>>>()
            .map(|validated| {
                Value::from(
                    validated
                        .into_iter()
                        .filter(|(_, field_value)| !field_value.is_undefined())
                        .collect::<Map>(),
                )
            })
    })
}

const NOT_AN_ARRAY: &str = " must be an array";

/// Validates every element of an array.
///
/// Element errors are prefixed with their position, `"{field}[{i}]: {message}"`,
/// and every element is checked. A non-array input fails with
/// `"{field} must be an array"`. On success the array holds the values the
/// element rule returned.
pub fn array_of(element_rule: Rule<Value, String>, field_name: impl Into<String>) -> Rule<Value, String> {
    let field_name = field_name.into();

    Rule::new(move |value: &Value| {
        let Some(elements) = value.as_array() else {
            return Validation::failure(format!("{field_name}{NOT_AN_ARRAY}"));
        };

        elements
            .iter()
            .enumerate()
            .map(|(position, element)| {
                element_rule
                    .check(element)
                    .map_errors(|message| format!("{field_name}[{position}]: {message}"))
            })
            .collect::<Validation<String, Vec<Value>>>()
            .map(Value::from)
    })
}
