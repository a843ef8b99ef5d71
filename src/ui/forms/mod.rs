// SPDX-License-Identifier: MPL-2.0
//! Contact and newsletter forms.
//!
//! Submission is simulated: a valid form is logged, cleared, and answered
//! with a localized thank-you message. Nothing leaves the process.

mod contact;
mod newsletter;
mod validation;

pub use contact::ContactForm;
pub use newsletter::NewsletterForm;
pub use validation::{is_valid_email, FieldError, FieldErrorKind, FormField};

use crate::i18n::I18n;
use std::fmt;

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// i18n key of the thank-you message.
    pub message_key: &'static str,
}

impl Confirmation {
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        i18n.tr(self.message_key)
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub(crate) fn check(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// First error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.0.iter().find(|err| err.field == field)
    }

    /// Localized messages, one per failing field.
    #[must_use]
    pub fn messages(&self, i18n: &I18n) -> Vec<(FormField, String)> {
        self.0
            .iter()
            .map(|err| {
                let text = match err.kind {
                    FieldErrorKind::TooShort { min } => {
                        i18n.tr_with_args(err.i18n_key(), &[("min", min.to_string().as_str())])
                    }
                    _ => i18n.tr(err.i18n_key()),
                };
                (err.field, text)
            })
            .collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(", "))
    }
}

impl std::error::Error for FormErrors {}
