use crate::form::field::{
    parse_decimal, parse_integer, split_list, FieldKind, FieldSpec, FieldValue,
};

/// Expect integers to be read from the leading digits only
#[test]
fn parses_leading_integer() {
    assert_eq!(parse_integer("5"), Some(5));
    assert_eq!(parse_integer("  -12abc"), Some(-12));
    assert_eq!(parse_integer("+7"), Some(7));
    assert_eq!(parse_integer("3.9"), Some(3));
    assert_eq!(parse_integer(""), None);
    assert_eq!(parse_integer("abc"), None);
    assert_eq!(parse_integer("-"), None);
    assert_eq!(parse_integer("99999999999999999999"), None);
}

/// Expect decimals to be read from the leading number only
#[test]
fn parses_leading_decimal() {
    assert_eq!(parse_decimal("2.50"), Some(2.5));
    assert_eq!(parse_decimal(" 3.5 EUR"), Some(3.5));
    assert_eq!(parse_decimal("-.5"), Some(-0.5));
    assert_eq!(parse_decimal("7."), Some(7.0));
    assert_eq!(parse_decimal("1e3x"), Some(1000.0));
    assert_eq!(parse_decimal("4e"), Some(4.0));
    assert_eq!(parse_decimal("."), None);
    assert_eq!(parse_decimal("N/A"), None);
    assert_eq!(parse_decimal(""), None);
}

/// Expect lists to be split on commas and trimmed in order
#[test]
fn splits_lists() {
    assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
    assert_eq!(split_list(""), vec![""]);
}

/// Expect only the empty string to count as blank for optional fields
#[test]
fn optional_blank_is_empty_string_only() {
    let field =
        FieldSpec::new("reputation", "reputation", "Reputation", FieldKind::Integer).optional();

    assert_eq!(field.read(""), None);
    assert_eq!(field.read(" "), Some(FieldValue::NotANumber));
    assert_eq!(field.read("10"), Some(FieldValue::Number(10i64.into())));
}
