// SPDX-License-Identifier: MPL-2.0
use super::validation::{require, require_email, require_min_chars, FormField};
use super::{Confirmation, FormErrors};
use crate::config::MIN_MESSAGE_LENGTH;

/// Fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every field and reports all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the failing fields in form order.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();
        require(FormField::Name, &self.name, &mut errors);
        require_email(FormField::Email, &self.email, &mut errors);
        require_min_chars(
            FormField::Message,
            &self.message,
            MIN_MESSAGE_LENGTH,
            &mut errors,
        );
        FormErrors::check(errors)
    }

    /// Validates, logs the message in place of sending it, and clears the form.
    ///
    /// # Errors
    ///
    /// Returns the failing fields; the form keeps its contents.
    pub fn submit(&mut self) -> Result<Confirmation, FormErrors> {
        self.validate()?;

        // Personal data stays out of the logs.
        tracing::info!(
            has_subject = !self.subject.trim().is_empty(),
            message_chars = self.message.trim().chars().count(),
            "contact form submitted"
        );
        self.reset();

        Ok(Confirmation {
            message_key: "form-contact-thanks",
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::I18n;
    use crate::ui::forms::{FieldError, FieldErrorKind};

    fn filled() -> ContactForm {
        ContactForm {
            name: "Awa Diallo".into(),
            email: "awa@example.com".into(),
            subject: "Formation bureautique".into(),
            message: "Bonjour, je souhaite des informations.".into(),
        }
    }

    #[test]
    fn valid_form_submits_and_resets() {
        let mut form = filled();
        let confirmation = form.submit().expect("form is valid");
        assert_eq!(confirmation.message_key, "form-contact-thanks");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn confirmation_is_localized() {
        let mut form = filled();
        let confirmation = form.submit().unwrap();
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(
            confirmation.message(&i18n),
            "Merci pour votre message ! Nous vous répondrons dans les plus brefs délais."
        );
    }

    #[test]
    fn subject_is_optional() {
        let form = ContactForm {
            subject: String::new(),
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = ContactForm::default();
        let errors = form.submit().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|err| err.field).collect();
        assert_eq!(
            fields,
            vec![FormField::Name, FormField::Email, FormField::Message]
        );
    }

    #[test]
    fn invalid_submission_keeps_contents() {
        let mut form = ContactForm {
            email: "not-an-email".into(),
            message: "Trop court".chars().take(5).collect(),
            ..filled()
        };
        let before = form.clone();
        let errors = form.submit().unwrap_err();

        assert_eq!(
            errors.for_field(FormField::Email),
            Some(&FieldError::new(FormField::Email, FieldErrorKind::InvalidEmail))
        );
        assert_eq!(
            errors.for_field(FormField::Message).map(|err| err.kind),
            Some(FieldErrorKind::TooShort {
                min: MIN_MESSAGE_LENGTH
            })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn error_messages_are_localized() {
        let form = ContactForm {
            message: "short".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(
            errors.messages(&i18n),
            vec![(
                FormField::Message,
                "Please write at least 10 characters.".to_string()
            )]
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn submission_log_omits_personal_data() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();

        let mut form = filled();
        tracing::subscriber::with_default(subscriber, || form.submit()).unwrap();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("contact form submitted"));
        assert!(!output.contains("awa@example.com"));
        assert!(!output.contains("Awa Diallo"));
    }
}
