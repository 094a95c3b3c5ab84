//! Field-level input validation.
//!
//! A [`Schema`] maps field names to the rules each field must satisfy and
//! produces a [`ValidationErrors`] list keyed by field name. The same
//! schemas back the server's request validation and the client's form
//! validation.

use std::fmt;

use serde::{Deserialize, Serialize};

const MAX_EMAIL_LENGTH: usize = 254;

/// A single constraint on a string field. Lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain a non-whitespace character
    Required,
    /// Value must look like `local@domain.tld`
    Email,
    MinLength(usize),
    MaxLength(usize),
}

impl Rule {
    fn check(self, value: &str) -> Option<String> {
        match self {
            Rule::Required => value
                .trim()
                .is_empty()
                .then(|| "is required".to_string()),
            Rule::Email => (!is_valid_email(value)).then(|| "must be a valid email".to_string()),
            Rule::MinLength(min) => (value.chars().count() < min)
                .then(|| format!("must be at least {} characters", min)),
            Rule::MaxLength(max) => (value.chars().count() > max)
                .then(|| format!("must not exceed {} characters", max)),
        }
    }
}

/// One failed rule for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Ordered list of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Messages reported for `field`, in rule order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// First field that failed, if any.
    pub fn first_field(&self) -> Option<&str> {
        self.0.first().map(|e| e.field.as_str())
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct FieldSchema {
    name: &'static str,
    rules: Vec<Rule>,
    optional: bool,
}

/// Field-to-rules mapping evaluated against a set of named values.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field that must be present.
    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldSchema {
            name,
            rules: rules.into_iter().collect(),
            optional: false,
        });
        self
    }

    /// Add a field whose rules only apply when a value is supplied.
    pub fn optional_field(
        mut self,
        name: &'static str,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        self.fields.push(FieldSchema {
            name,
            rules: rules.into_iter().collect(),
            optional: true,
        });
        self
    }

    /// Validate `values` (pairs of field name and supplied value).
    ///
    /// Fields are checked in schema order and every failing rule is
    /// reported. A missing required field reports only "is required".
    pub fn validate(&self, values: &[(&str, Option<&str>)]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in &self.fields {
            let value = values
                .iter()
                .find(|(name, _)| *name == field.name)
                .and_then(|(_, value)| *value);

            match value {
                None if field.optional => {}
                None => errors.push(field.name, "is required"),
                Some(value) => {
                    for rule in &field.rules {
                        if let Some(message) = rule.check(value) {
                            errors.push(field.name, message);
                        }
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain without empty labels or whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
