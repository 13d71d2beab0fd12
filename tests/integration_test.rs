#![cfg(all(feature = "compose", feature = "validation", feature = "optics"))]
//! End-to-end scenarios across the combinators, `Maybe`, validation and lenses.

use std::cell::Cell;

use funkit::prelude::*;
use rstest::rstest;

#[rstest]
#[case(10, 2, 5)]
#[case(10, 0, 0)]
#[case(i32::MIN, -1, 0)]
fn safe_divide_falls_back(#[case] dividend: i32, #[case] divisor: i32, #[case] expected: i32) {
    assert_eq!(safe_divide(dividend, divisor).get_or_else(0), expected);
}

#[rstest]
#[case(r#"{"a": {"b": {"c": 1}}}"#, 1.0)]
#[case(r#"{"a": {}}"#, -1.0)]
#[case(r#"{"a": {"b": [10, 20]}}"#, -1.0)]
fn safe_get_falls_back(#[case] json: &str, #[case] expected: f64) {
    let data = Value::parse(json).unwrap();
    let found = safe_get(&data, "a.b.c").flat_map(|value| Maybe::from(value.as_f64()));
    assert_eq!(found.get_or_else(-1.0), expected);
}

#[rstest]
fn signup_form_reports_one_error_per_field() {
    let form = Value::object([("name", ""), ("email", "bad")]);
    let validator = object([
        ("name", all([rules::required()])),
        ("email", all([rules::required(), rules::email()])),
    ]);

    let result = validator.check(&form);

    assert!(result.is_invalid());
    assert_eq!(result.errors().map(ValidationErrors::len), Some(2));
}

#[rstest]
fn theme_lens_updates_and_shares() {
    let state = Value::parse(r#"{"preferences": {"theme": "dark"}, "session": {"id": 7}}"#).unwrap();
    let theme = path(["preferences", "theme"]);

    assert_eq!(theme.get(&state), &Value::from("dark"));

    let light = theme.set(state.clone(), Value::from("light"));
    assert_eq!(theme.get(&light), &Value::from("light"));
    assert!(prop("session").get(&light).same_ref(prop("session").get(&state)));
}

#[rstest]
fn memoized_function_runs_once_per_argument() {
    let calls = Cell::new(0);
    let grade_letter = memoize(|score: u32| {
        calls.set(calls.get() + 1);
        match score {
            90.. => 'A',
            80..=89 => 'B',
            _ => 'C',
        }
    });

    assert_eq!(grade_letter.call(93), 'A');
    assert_eq!(grade_letter.call(93), 'A');
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn pipeline_over_a_gradebook() {
    let gradebook = Value::parse(
        r#"{"assignments": [{"score": 90, "weight": 2}, {"score": 70, "weight": 1}]}"#,
    )
    .unwrap();

    let scores = |book: &Value| -> Maybe<Vec<f64>> {
        safe_get(book, "assignments")
            .flat_map(|assignments| {
                assignments
                    .as_array()
                    .unwrap_or_default()
                    .iter()
                    .map(|assignment| Maybe::from(assignment.get("score").and_then(Value::as_f64)))
                    .collect()
            })
    };
    let average = pipe!(
        |values: Vec<f64>| (values.iter().sum::<f64>(), values.len()),
        |(total, count): (f64, usize)| safe_divide(total, count as f64)
    );

    let result = scores(&gradebook).flat_map(average);
    assert_eq!(result, Maybe::of(80.0));

    let curved = path_str("assignments.1.score").set(gradebook, Value::from(80));
    assert_eq!(scores(&curved).flat_map(average), Maybe::of(85.0));
}
