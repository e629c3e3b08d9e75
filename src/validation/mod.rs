//! Client-side form validation
//!
//! Forms are checked field by field, in the order they appear on the page.
//! Every failing field yields one message (its first failing rule); the first
//! message overall is what the user sees when submission is blocked.

pub mod attachment;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub use attachment::{Attachment, AttachmentPolicy};

/// Same pattern the public forms have always used for email addresses
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Check an email address against the form pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// A single constraint on a text field
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Non-empty after trimming
    Required(&'static str),
    /// At least `n` characters
    MinLength(usize, &'static str),
    /// Matches the email pattern
    Email(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match *self {
            Rule::Required(message) if value.trim().is_empty() => Some(message),
            Rule::MinLength(min, message) if value.chars().count() < min => Some(message),
            Rule::Email(message) if !is_valid_email(value) => Some(message),
            _ => None,
        }
    }
}

/// Validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// All field failures of one form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `rules` to `value`, recording the first failing rule
    pub fn check(&mut self, field: &'static str, value: &str, rules: &[Rule]) -> &mut Self {
        if let Some(message) = rules.iter().find_map(|rule| rule.check(value)) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message shown when submission is blocked
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Inline message for a given field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) if self.errors.len() > 1 => {
                write!(f, "{} (and {} more)", first.message, self.errors.len() - 1)
            }
            Some(first) => write!(f, "{}", first.message),
            None => write!(f, "no errors"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Implemented by every form the portal submits
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}
