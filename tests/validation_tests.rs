#![cfg(feature = "validation")]
//! Integration tests for error-accumulating validation.

use funkit::typeclass::Applicative;
use funkit::validation::{
    Rule, Validation, ValidationErrors, all, any, array_of, field, object, optional, rules,
};
use funkit::value::Value;
use proptest::prelude::*;
use rstest::rstest;

fn signup() -> Rule<Value, String> {
    object([
        ("name", all([rules::required(), rules::is_string()])),
        ("email", all([rules::required(), rules::email()])),
        ("age", optional(rules::range(13.0, 120.0))),
        ("plan", optional(rules::one_of(["free", "pro"]))),
    ])
}

fn messages(validation: Validation<String, Value>) -> Vec<String> {
    validation.get().err().map(ValidationErrors::into_vec).unwrap_or_default()
}

#[rstest]
fn two_failing_fields_report_both() {
    let form = Value::object([("name", ""), ("email", "bad")]);
    let result = object([
        ("name", all([rules::required()])),
        ("email", all([rules::required(), rules::email()])),
    ])
    .check(&form);

    assert_eq!(
        messages(result),
        vec!["name is required", "email must be a valid email address"]
    );
}

#[rstest]
fn every_field_and_rule_runs() {
    let form = Value::object([("email", Value::Null), ("age", Value::from(7)), ("plan", Value::from("gold"))]);
    assert_eq!(
        messages(signup().check(&form)),
        vec![
            "name is required",
            "name must be a string",
            "email is required",
            "email must be a valid email address",
            "age must be between 13 and 120",
            r#"plan must be one of "free", "pro""#,
        ]
    );
}

#[rstest]
fn valid_form_keeps_validated_fields_only() {
    let form = Value::object([
        ("name", Value::from("Ada")),
        ("email", Value::from("ada@example.com")),
        ("nickname", Value::from("countess")),
    ]);

    let accepted = signup().check(&form).get().unwrap();

    assert_eq!(
        accepted,
        Value::object([("name", "Ada"), ("email", "ada@example.com")])
    );
}

#[rstest]
fn nested_arrays_prefix_positions() {
    let roster = object([(
        "students",
        array_of(object([("name", rules::required())]), "students"),
    )]);
    let form = Value::parse(r#"{"students": [{"name": "Ada"}, {}, {"name": ""}]}"#).unwrap();

    assert_eq!(
        messages(roster.check(&form)),
        vec![
            "students[1]: name is required",
            "students[2]: name is required",
        ]
    );
}

#[rstest]
fn any_reports_every_alternative() {
    let contact = any([rules::email(), rules::min_length(10)]);
    assert!(contact.check(&Value::from("ada@example.com")).is_valid());
    assert!(contact.check(&Value::from("+44 20 7946 0000")).is_valid());
    assert_eq!(
        messages(field("contact", contact).check(&Value::from("nope"))),
        vec![
            "contact must be a valid email address",
            "contact must be at least 10 characters",
        ]
    );
}

#[rstest]
fn errors_compose_with_question_mark() {
    fn parse_age(value: &Value) -> Result<f64, ValidationErrors<String>> {
        let checked = all([rules::is_number(), rules::range(0.0, 150.0)]).check(value).get()?;
        Ok(checked.as_f64().unwrap_or_default())
    }

    assert_eq!(parse_age(&Value::from(42)).ok(), Some(42.0));
    let error = parse_age(&Value::from("x")).unwrap_err();
    assert_eq!(error.to_string(), "must be a number; must be a number");
}

#[rstest]
#[case(Validation::success(3), 3)]
#[case(Validation::failure("broken".to_string()), 0)]
fn get_or_else_defaults(#[case] validation: Validation<String, i32>, #[case] expected: i32) {
    assert_eq!(validation.get_or_else(0), expected);
}

#[rstest]
fn applicative_map2_accumulates() {
    let name: Validation<&str, &str> = Validation::failure("name is required");
    let age: Validation<&str, u8> = Validation::failure("age must be a number");
    let person = name.map2(age, |name, age| format!("{name} ({age})"));
    assert_eq!(
        person.errors().map(|errors| errors.as_slice().to_vec()),
        Some(vec!["name is required", "age must be a number"])
    );
}

proptest! {
    #[test]
    fn all_keeps_failures_in_declaration_order(outcomes in prop::collection::vec(prop::arbitrary::any::<bool>(), 0..8)) {
        let checks: Vec<Rule<i32, String>> = outcomes
            .iter()
            .enumerate()
            .map(|(position, passes)| {
                let passes = *passes;
                Rule::predicate(move |_: &i32| passes, format!("rule {position}"))
            })
            .collect();

        let expected: Vec<String> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, passes)| !**passes)
            .map(|(position, _)| format!("rule {position}"))
            .collect();

        let result = all(checks).check(&0);
        let found = result.get().err().map(ValidationErrors::into_vec).unwrap_or_default();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn object_errors_are_union_of_field_errors(name_ok in prop::arbitrary::any::<bool>(), email_ok in prop::arbitrary::any::<bool>()) {
        let form = Value::object([
            ("name", if name_ok { "Ada" } else { "" }),
            ("email", if email_ok { "ada@example.com" } else { "bad" }),
        ]);
        let rule = object([
            ("name", rules::required()),
            ("email", rules::email()),
        ]);

        let mut expected = Vec::new();
        if !name_ok {
            expected.push("name is required".to_string());
        }
        if !email_ok {
            expected.push("email must be a valid email address".to_string());
        }
        prop_assert_eq!(messages(rule.check(&form)), expected);
    }
}
