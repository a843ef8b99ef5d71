// SPDX-License-Identifier: MPL-2.0
use super::validation::{require_email, FormField};
use super::{Confirmation, FormErrors};

/// Newsletter sign-up form: a single email field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    /// # Errors
    ///
    /// Returns the email error if the address is missing or malformed.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();
        require_email(FormField::Email, &self.email, &mut errors);
        FormErrors::check(errors)
    }

    /// # Errors
    ///
    /// Returns the email error; the field keeps its contents.
    pub fn submit(&mut self) -> Result<Confirmation, FormErrors> {
        self.validate()?;
        tracing::info!("newsletter subscription");
        self.email.clear();
        Ok(Confirmation {
            message_key: "form-newsletter-thanks",
        })
    }
}
