#![forbid(unsafe_code)]

//! Contact-form validation.
//!
//! The contact form requires a name, an email address, and a message; all
//! three must be non-blank after trimming. Validation returns a typed error
//! listing every missing field so the host can highlight them all at once.
//! It never panics and never stops at the first problem.

use std::fmt;

/// The fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The sender's name.
    Name,
    /// The sender's email address.
    Email,
    /// The message body.
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

/// Validation failure: one or more required fields are blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Every field that failed, in form order.
    pub missing: Vec<Field>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required fields missing:")?;
        for field in &self.missing {
            write!(f, " {field}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A contact-form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// The sender's name.
    pub name: String,
    /// The sender's email address.
    pub email: String,
    /// The message body.
    pub message: String,
}

impl ContactForm {
    /// Create a submission from its raw field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check that every required field is non-blank after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(Field::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(Field::Message);
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}
