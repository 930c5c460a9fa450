//! Form fields and how their raw text becomes JSON.

use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text rendered as a password input
    Secret,
    /// Leading integer of the text, e.g. `"5 points"` is `5`
    Integer,
    /// Leading decimal number of the text, e.g. `"2.50 EUR"` is `2.5`
    Decimal,
    /// Comma separated values, each trimmed
    List,
    /// Checkbox
    Flag,
}

/// What to send when a field is left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankPolicy {
    /// Serialize the blank value according to the field kind.
    Send,
    /// Leave the field out of the payload so the API keeps its current value.
    Omit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the JSON payload
    pub name: &'static str,
    /// Id of the input element the value is read from
    pub input: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub blank: BlankPolicy,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        input: &'static str,
        label: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            input,
            label,
            kind,
            blank: BlankPolicy::Send,
        }
    }

    /// Marks the field as omitted from the payload when left blank.
    pub const fn optional(self) -> Self {
        Self {
            blank: BlankPolicy::Omit,
            ..self
        }
    }

    /// Converts the raw input text into the value sent for this field.
    ///
    /// Returns `None` when the field is blank and its policy is [`BlankPolicy::Omit`].
    /// Only the empty string counts as blank; whitespace is a value.
    pub fn read(&self, raw: &str) -> Option<FieldValue> {
        if raw.is_empty() && self.blank == BlankPolicy::Omit {
            return None;
        }

        let value = match self.kind {
            FieldKind::Text | FieldKind::Secret => FieldValue::Text(raw.to_string()),
            FieldKind::Integer => match parse_integer(raw) {
                Some(n) => FieldValue::Number(Number::from(n)),
                None => FieldValue::NotANumber,
            },
            FieldKind::Decimal => parse_decimal(raw)
                .and_then(Number::from_f64)
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::NotANumber),
            FieldKind::List => FieldValue::List(split_list(raw)),
            FieldKind::Flag => FieldValue::Flag(matches!(raw, "true" | "on")),
        };

        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Number),
    /// A numeric field that did not parse; sent as `null`, never rejected client side.
    NotANumber,
    List(Vec<String>),
    Flag(bool),
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => Value::String(text),
            FieldValue::Number(number) => Value::Number(number),
            FieldValue::NotANumber => Value::Null,
            FieldValue::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
            FieldValue::Flag(flag) => Value::Bool(flag),
        }
    }
}

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and one sign are accepted and parsing stops at the first non-digit, so
/// `" 12abc"` is `12`. Returns `None` when no digit leads the text or the value overflows.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }

    text[..sign_len + digits].parse().ok()
}

/// Parses the leading decimal number of `raw`.
///
/// Accepts leading whitespace, a sign, digits with an optional fraction, and an optional
/// exponent; trailing text is ignored. Returns `None` when no number leads the text.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(text.starts_with(['+', '-']));

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent..]);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Splits comma separated input, trimming every element and keeping their order.
///
/// Empty input yields a single empty element, matching what the API has always received.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}
