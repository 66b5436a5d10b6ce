//! Entity validation: required attributes and value constraints.
//!
//! Validation is separate from serialization. Callers validate at
//! construction time (or after deserializing untrusted input) and the
//! serializer trusts what it is given.

use std::fmt;

use crate::model::{SchemaEntity, ToAttributeValue};
use crate::naming::unqualified_type_name;

/// A single problem found on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path to the offending attribute, e.g. `location.address.postal_code`.
    pub attribute: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.attribute, self.message)
    }
}

/// All issues collected while validating one entity graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue against `attribute`.
    pub fn push(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            attribute: attribute.into(),
            message: message.into(),
        });
    }

    /// Records an issue unless `value` is present (not blank).
    pub fn require<V: ToAttributeValue + ?Sized>(&mut self, attribute: &str, value: &V) {
        if value.to_attribute_value().is_blank() {
            self.push(attribute, "is required");
        }
    }

    /// Records an issue unless `condition` holds.
    pub fn check(&mut self, attribute: &str, condition: bool, message: impl Into<String>) {
        if !condition {
            self.push(attribute, message);
        }
    }

    /// Records an issue if a non-blank `value` is not an http(s) URL.
    pub fn check_url(&mut self, attribute: &str, value: Option<&str>) {
        if let Some(url) = value.filter(|u| !u.trim().is_empty()) {
            self.check(attribute, is_web_url(url), format!("`{url}` is not an http(s) URL"));
        }
    }

    /// Applies [`ValidationReport::check_url`] to every element of `values`.
    pub fn check_urls(&mut self, attribute: &str, values: &[String]) {
        for (i, url) in values.iter().enumerate() {
            self.check_url(&format!("{attribute}[{i}]"), Some(url));
        }
    }

    /// Validates a nested value and records its issues under `attribute`.
    pub fn nested<T: Validate + ?Sized>(&mut self, attribute: &str, value: &T) {
        let mut child = ValidationReport::new();
        value.collect_issues(&mut child);
        for issue in child.issues {
            let separator = if issue.attribute.starts_with('[') { "" } else { "." };
            self.push(format!("{attribute}{separator}{}", issue.attribute), issue.message);
        }
    }

    /// Returns the recorded issues.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns true if no issues were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the report into a result for an entity of type `type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] if any issue was recorded.
    pub fn into_result(self, type_name: &str) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Ok(());
        }
        Err(ValidationError::Invalid {
            type_name: unqualified_type_name(type_name).to_owned(),
            report: self,
        })
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Raised when an entity graph fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more attributes are missing or malformed.
    #[error("invalid {type_name}: {report}")]
    Invalid {
        /// Unqualified type name of the entity that was validated.
        type_name: String,
        /// Every issue found in the entity graph.
        report: ValidationReport,
    },
}

/// Attribute-level validation for entity types.
pub trait Validate {
    /// Appends this value's issues to `report`.
    fn collect_issues(&self, report: &mut ValidationReport);

    /// Validates this value and everything nested inside it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] listing every issue found.
    fn validate(&self) -> Result<(), ValidationError>
    where
        Self: SchemaEntity,
    {
        let mut report = ValidationReport::new();
        self.collect_issues(&mut report);
        report.into_result(self.type_name())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn collect_issues(&self, report: &mut ValidationReport) {
        if let Some(value) = self {
            value.collect_issues(report);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn collect_issues(&self, report: &mut ValidationReport) {
        for (i, item) in self.iter().enumerate() {
            report.nested(&format!("[{i}]"), item);
        }
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn collect_issues(&self, report: &mut ValidationReport) {
        (**self).collect_issues(report);
    }
}

/// Returns true if `code` looks like an ISO 4217 currency code (`USD`, `EUR`).
#[must_use]
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Returns true if `value` is an absolute `http` or `https` URL.
#[must_use]
pub fn is_web_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
