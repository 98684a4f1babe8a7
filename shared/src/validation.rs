//! Input validation helpers
//!
//! Length limits and custom rules shared by the draft payloads, plus a
//! flattening of `validator` reports into field paths and messages.
//! These checks only gate submissions from this client; the backend
//! re-validates everything.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

// ── Text length limits ──────────────────────────────────────────────

/// Menu items, spa services, staff names
pub const MIN_NAME_LEN: u64 = 3;

/// Categories, departments, roles, access levels
pub const MIN_SHORT_NAME_LEN: u64 = 2;

/// Entity names of any kind
pub const MAX_NAME_LEN: u64 = 200;

/// Descriptions, bios, ingredient lists
pub const MAX_NOTE_LEN: u64 = 2000;

/// Specialist biographies
pub const MIN_BIO_LEN: u64 = 10;

// ── Custom rules ────────────────────────────────────────────────────

/// Reject values that are empty once trimmed (required selects and refs)
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be empty"));
    }
    Ok(())
}

/// Prices must be strictly positive and finite
pub fn positive_price(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(error("price", "must be greater than zero"));
    }
    Ok(())
}

/// Every entry of a reference list must be a non-blank id
pub fn non_blank_refs(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(error("blank_ref", "contains an empty reference"));
    }
    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

// ── Reporting ───────────────────────────────────────────────────────

/// A single failed rule, addressed by its field path (`extras[1].price`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Flatten a validation report, sorted by field path
pub fn issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// One-line summary of flattened issues
pub fn summarize(list: &[FieldIssue]) -> String {
    list.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    out.push(FieldIssue {
                        field: path.clone(),
                        message: describe(err),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    match err.code.as_ref() {
        "length" => match (err.params.get("min"), err.params.get("max")) {
            (Some(min), Some(max)) => format!("length must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {} characters", min),
            (None, Some(max)) => format!("must be at most {} characters", max),
            (None, None) => "has an invalid length".to_string(),
        },
        "range" => match (err.params.get("min"), err.params.get("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {}", min),
            (None, Some(max)) => format!("must be at most {}", max),
            (None, None) => "is out of range".to_string(),
        },
        code => format!("failed rule '{}'", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Line {
        #[validate(custom(function = "not_blank"))]
        name: String,
        #[validate(custom(function = "positive_price"))]
        price: f64,
    }

    #[derive(Validate)]
    struct Draft {
        #[validate(length(min = 3))]
        name: String,
        #[validate(nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn nested_issues_are_addressed_by_path() {
        let draft = Draft {
            name: "ab".into(),
            lines: vec![
                Line { name: "ok".into(), price: 1.0 },
                Line { name: "  ".into(), price: 0.0 },
            ],
        };
        let report = draft.validate().unwrap_err();
        let found = issues(&report);
        let fields: Vec<&str> = found.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["lines[1].name", "lines[1].price", "name"]);
        assert_eq!(found[2].message, "must be at least 3 characters");
    }

    #[test]
    fn summary_joins_messages() {
        let draft = Draft { name: "Soup".into(), lines: vec![Line { name: "x".into(), price: -2.0 }] };
        let report = draft.validate().unwrap_err();
        assert_eq!(summarize(&issues(&report)), "lines[0].price: must be greater than zero");
        assert_eq!(summarize(&[]), "");
    }

    #[test]
    fn prices_must_be_finite() {
        assert!(positive_price(f64::NAN).is_err());
        assert!(positive_price(f64::INFINITY).is_err());
        assert!(positive_price(0.0).is_err());
        assert!(positive_price(12.5).is_ok());
    }
}
