//! Contact form fields and validation.
//!
//! The form never transmits anything; validation only decides which
//! message the visitor sees.

use serde::Serialize;
use thiserror::Error;

/// Shown when a required field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Shown after a valid submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactField {
    /// Form field name.
    pub name: &'static str,
    pub label: &'static str,
    /// `input` type, or `textarea`.
    pub kind: &'static str,
}

/// Fields of the contact form, all required.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        name: "name",
        label: "Your Name",
        kind: "text",
    },
    ContactField {
        name: "email",
        label: "Your Email",
        kind: "email",
    },
    ContactField {
        name: "message",
        label: "Your Message",
        kind: "textarea",
    },
];

/// Returned when a submission leaves a required field empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all fields.")]
pub struct MissingFields {
    /// Names of the empty fields.
    pub fields: Vec<&'static str>,
}

/// A filled-in contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks that every field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFields`] listing the empty fields.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let values = [&self.name, &self.email, &self.message];
        let fields: Vec<&'static str> = CONTACT_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.name)
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(MissingFields { fields })
        }
    }

    /// Returns the message shown after submitting this form.
    #[must_use]
    pub fn response_message(&self) -> &'static str {
        match self.validate() {
            Ok(()) => THANK_YOU_MESSAGE,
            Err(_) => MISSING_FIELDS_MESSAGE,
        }
    }
}
