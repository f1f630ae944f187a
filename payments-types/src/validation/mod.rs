//! Table-driven validation model.
//!
//! Every entity implements [`Validate`] by returning its field table: one
//! [`Field`] per struct field, carrying the JSON name, a borrowed view of the
//! value and the list of [`Rule`]s that apply. A single [`Validator`] walks the
//! tables, recursing into nested structs and list elements, and collects every
//! violation it finds.
//!
//! Adding a new entity only requires declaring its table.

mod rule;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use rule::Rule;
use rule::Outcome;

/// Common rule set for ISO-4217-shaped currency codes.
pub const CURRENCY: &[Rule] = &[Rule::Required, Rule::Len(3), Rule::Alpha];

/// Common rule set for decimal amounts.
pub const AMOUNT: &[Rule] = &[Rule::Required, Rule::Numeric];

/// Common rule set for required free text.
pub const REQUIRED: &[Rule] = &[Rule::Required];

/// A type that declares its own validation table.
pub trait Validate {
    /// Returns the rule table for this value, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Borrowed view of a field value, as seen by the rule engine.
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Date(Option<&'a DateTime<Utc>>),
    /// A nested struct, validated under `parent.field`.
    Nested(&'a dyn Validate),
    /// A composed base struct whose fields live at the parent's level.
    Embedded(&'a dyn Validate),
    List(Vec<&'a dyn Validate>),
}

impl FieldValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Date(_) => "date",
            FieldValue::Nested(_) => "struct",
            FieldValue::Embedded(_) => "embedded struct",
            FieldValue::List(_) => "list",
        }
    }
}

/// One row of a validation table.
pub struct Field<'a> {
    name: &'static str,
    value: FieldValue<'a>,
    rules: &'static [Rule],
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: FieldValue<'a>, rules: &'static [Rule]) -> Self {
        Self { name, value, rules }
    }

    pub fn text(name: &'static str, value: &'a str, rules: &'static [Rule]) -> Self {
        Self::new(name, FieldValue::Text(value), rules)
    }

    pub fn integer(name: &'static str, value: i64, rules: &'static [Rule]) -> Self {
        Self::new(name, FieldValue::Integer(value), rules)
    }

    pub fn date(
        name: &'static str,
        value: Option<&'a DateTime<Utc>>,
        rules: &'static [Rule],
    ) -> Self {
        Self::new(name, FieldValue::Date(value), rules)
    }

    pub fn nested(name: &'static str, value: &'a dyn Validate, rules: &'static [Rule]) -> Self {
        Self::new(name, FieldValue::Nested(value), rules)
    }

    /// A composed base struct. The name is informational only.
    pub fn embedded(name: &'static str, value: &'a dyn Validate) -> Self {
        Self::new(name, FieldValue::Embedded(value), &[])
    }

    pub fn list<T: Validate>(name: &'static str, items: &'a [T], rules: &'static [Rule]) -> Self {
        let items = items.iter().map(|item| item as &dyn Validate).collect();
        Self::new(name, FieldValue::List(items), rules)
    }
}

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Dot-separated path of the offending field, e.g. `attributes.fx.exchange_rate`.
    #[schema(example = "attributes.currency")]
    pub field: String,
    /// The rule tag that failed, e.g. `len=3`.
    pub rule: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.field, self.message, self.rule)
    }
}

/// Aggregate validation failure. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_violations(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.0
    }

    /// Returns true if any violation points at `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

/// Stateless rule engine. Built once and handed to whoever needs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validates `entity` against its table, recursively.
    pub fn validate(&self, entity: &dyn Validate) -> Result<(), ValidationErrors> {
        let mut violations = Vec::new();
        self.walk(entity, "", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }

    fn walk(&self, entity: &dyn Validate, prefix: &str, out: &mut Vec<Violation>) {
        for field in entity.fields() {
            let path = join(prefix, field.name);

            for rule in field.rules {
                if let Outcome::Failed(message) = rule.check(&field.value) {
                    out.push(Violation {
                        field: path.clone(),
                        rule: rule.to_string(),
                        message,
                    });
                    // Further rules are meaningless on a missing value.
                    if *rule == Rule::Required {
                        break;
                    }
                }
            }

            match &field.value {
                FieldValue::Nested(inner) => self.walk(*inner, &path, out),
                FieldValue::Embedded(inner) => self.walk(*inner, prefix, out),
                FieldValue::List(items) if field.rules.contains(&Rule::Dive) => {
                    for (i, item) in items.iter().enumerate() {
                        self.walk(*item, &format!("{}[{}]", path, i), out);
                    }
                }
                _ => {}
            }
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
