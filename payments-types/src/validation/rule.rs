//! Rule primitives and their evaluation against a single field value.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::FieldValue;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$").expect("valid numeric regex"));
static ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("valid alpha regex"));
static ALPHANUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("valid alphanum regex"));

/// A single declarative constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value is non-empty / non-zero for its kind.
    Required,
    /// Text is a decimal number (sign and fraction optional).
    Numeric,
    /// Text contains ASCII letters only.
    Alpha,
    /// Text contains ASCII letters and digits only.
    Alphanum,
    /// Text is exactly N characters long.
    Len(usize),
    /// Text is one of the listed literals.
    OneOf(&'static [&'static str]),
    /// Value equals the zero value for its kind.
    IsDefault,
    /// Every element of a list is validated with its own rule table.
    Dive,
}

/// Why a rule rejected a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Passed,
    Failed(String),
}

impl Rule {
    /// Evaluates the rule against a value.
    ///
    /// `Dive` and nested structs are handled by the engine; here `Dive` only
    /// checks that it was attached to a list.
    pub(crate) fn check(&self, value: &FieldValue<'_>) -> Outcome {
        match (self, value) {
            (Rule::Required, FieldValue::Text(s)) => expect(!s.is_empty(), "is required"),
            (Rule::Required, FieldValue::Integer(n)) => expect(*n != 0, "is required"),
            (Rule::Required, FieldValue::Date(d)) => expect(d.is_some(), "is required"),
            (Rule::Required, FieldValue::Nested(_) | FieldValue::Embedded(_)) => Outcome::Passed,

            (Rule::Numeric, FieldValue::Text(s)) => {
                expect(NUMERIC.is_match(s), "must be a decimal number")
            }
            (Rule::Alpha, FieldValue::Text(s)) => {
                expect(ALPHA.is_match(s), "must contain alphabetic characters only")
            }
            (Rule::Alphanum, FieldValue::Text(s)) => expect(
                ALPHANUM.is_match(s),
                "must contain alphanumeric characters only",
            ),
            (Rule::Len(n), FieldValue::Text(s)) => {
                let actual = s.chars().count();
                if actual == *n {
                    Outcome::Passed
                } else {
                    Outcome::Failed(format!(
                        "must be exactly {} characters long (got {})",
                        n, actual
                    ))
                }
            }
            (Rule::OneOf(allowed), FieldValue::Text(s)) => {
                if allowed.contains(s) {
                    Outcome::Passed
                } else {
                    Outcome::Failed(format!("must be one of [{}]", allowed.join(", ")))
                }
            }

            (Rule::IsDefault, FieldValue::Text(s)) => expect(s.is_empty(), "must not be set"),
            (Rule::IsDefault, FieldValue::Integer(n)) => expect(*n == 0, "must not be set"),
            (Rule::IsDefault, FieldValue::Date(d)) => expect(d.is_none(), "must not be set"),
            (Rule::IsDefault, FieldValue::List(items)) => {
                expect(items.is_empty(), "must not be set")
            }

            (Rule::Dive, FieldValue::List(_)) => Outcome::Passed,

            (rule, value) => Outcome::Failed(format!(
                "rule `{}` cannot be applied to a {} value",
                rule,
                value.kind()
            )),
        }
    }
}

fn expect(ok: bool, message: &str) -> Outcome {
    if ok {
        Outcome::Passed
    } else {
        Outcome::Failed(message.to_string())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::Numeric => write!(f, "numeric"),
            Rule::Alpha => write!(f, "alpha"),
            Rule::Alphanum => write!(f, "alphanum"),
            Rule::Len(n) => write!(f, "len={}", n),
            Rule::OneOf(allowed) => write!(f, "oneof={}", allowed.join(" ")),
            Rule::IsDefault => write!(f, "isdefault"),
            Rule::Dive => write!(f, "dive"),
        }
    }
}
