//! Contact form state and submission.
//!
//! Nothing is sent anywhere by default: [`LocalAcknowledgment`] logs the
//! message and reports success. A real delivery backend plugs in through
//! [`ContactDelivery`].

use serde::Serialize;
use thiserror::Error;

pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn get(self, form: &ContactForm) -> &str {
        match self {
            Field::Name => &form.name,
            Field::Email => &form.email,
            Field::Subject => &form.subject,
            Field::Message => &form.message,
        }
    }

    pub fn set(self, form: &mut ContactForm, value: String) {
        match self {
            Field::Name => form.name = value,
            Field::Email => form.email = value,
            Field::Subject => form.subject = value,
            Field::Message => form.message = value,
        }
    }

    /// Form control name and id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message could not be sent: {0}")]
    Delivery(String),
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| f.get(self).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Receipt shown to the sender after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: String,
}

/// Hands a validated message to whoever delivers it.
pub trait ContactDelivery {
    fn deliver(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Logs the submission and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAcknowledgment;

impl ContactDelivery for LocalAcknowledgment {
    fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
        let payload =
            serde_json::to_string(form).map_err(|e| ContactError::Delivery(e.to_string()))?;
        log::info!("Form submitted: {payload}");
        Ok(())
    }
}

/// Validate and deliver `form`. Fields are only cleared once delivery
/// succeeds; on any error they are left for the sender to correct.
pub fn submit<D: ContactDelivery>(
    form: &mut ContactForm,
    delivery: &D,
) -> Result<Acknowledgment, ContactError> {
    form.validate()?;
    delivery.deliver(form).inspect_err(|e| {
        log::warn!("contact delivery failed: {e}");
    })?;
    form.clear();
    Ok(Acknowledgment {
        message: ACKNOWLEDGMENT.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    struct Failing;

    impl ContactDelivery for Failing {
        fn deliver(&self, _form: &ContactForm) -> Result<(), ContactError> {
            Err(ContactError::Delivery("backend unavailable".to_string()))
        }
    }

    #[derive(Default)]
    struct Recording {
        sent: RefCell<Vec<ContactForm>>,
    }

    impl ContactDelivery for Recording {
        fn deliver(&self, form: &ContactForm) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(form.clone());
            Ok(())
        }
    }

    #[test]
    fn test_submit_clears_fields() {
        let mut form = filled();
        let ack = submit(&mut form, &LocalAcknowledgment).unwrap();
        assert_eq!(ack.message, ACKNOWLEDGMENT);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_field_keeps_input() {
        for field in Field::ALL {
            let mut form = filled();
            field.set(&mut form, "   ".to_string());
            let before = form.clone();
            let recording = Recording::default();
            let err = submit(&mut form, &recording).unwrap_err();
            assert_eq!(err, ContactError::MissingField(field));
            assert_eq!(form, before);
            assert!(recording.sent.borrow().is_empty());
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert_eq!(
            submit(&mut form, &LocalAcknowledgment),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(form.email, "not-an-email");
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("@b"));
        assert!(!looks_like_email("a b@c"));
    }

    #[test]
    fn test_delivery_failure_keeps_input() {
        let mut form = filled();
        let err = submit(&mut form, &Failing).unwrap_err();
        assert!(matches!(err, ContactError::Delivery(_)));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_delivery_sees_submitted_fields() {
        let mut form = filled();
        let recording = Recording::default();
        submit(&mut form, &recording).unwrap();
        assert_eq!(recording.sent.borrow().as_slice(), &[filled()]);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Your Email is required"
        );
    }
}
