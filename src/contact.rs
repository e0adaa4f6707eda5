use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::mail::{MailError, MailTransport, TemplateParams};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::FullName, Self::Email, Self::Phone, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Self::FullName => "contact_name",
            Self::Email => "contact_email",
            Self::Phone => "contact_phone",
            Self::Message => "contact_message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    /// Carries the message for the failure banner.
    Failure(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    full_name: String,
    email: String,
    phone: String,
    message: String,
    errors: BTreeMap<Field, String>,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Updates one field and clears that field's error only.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
        self.errors.remove(&field);
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Checks every field and returns the field→message map, without storing it.
    pub fn validate(&self) -> BTreeMap<Field, String> {
        let mut errors = BTreeMap::new();
        for field in Field::ALL {
            if self.value(field).trim().is_empty() {
                errors.insert(field, format!("{} is required", field.label()));
            }
        }
        if !errors.contains_key(&Field::Email) && !is_valid_email(&self.email) {
            errors.insert(
                Field::Email,
                "Please enter a valid email address".to_string(),
            );
        }
        errors
    }

    /// Starts a submission. Returns the payload to send, or `None` when a send is
    /// already in flight or the form is invalid (errors are then stored).
    pub fn begin_submit(&mut self) -> Option<TemplateParams> {
        if self.status.is_sending() {
            return None;
        }
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        let email = self.email.trim().to_string();
        Some(TemplateParams {
            from_name: self.full_name.trim().to_string(),
            from_email: email.clone(),
            reply_to: email,
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Applies the result of the send started by [`ContactForm::begin_submit`].
    pub fn finish_submit(&mut self, result: Result<(), MailError>) {
        if !self.status.is_sending() {
            return;
        }
        match result {
            Ok(()) => {
                let status = SubmitStatus::Success;
                *self = Self {
                    status,
                    ..Self::default()
                };
            }
            Err(e) => self.status = SubmitStatus::Failure(e.to_string()),
        }
    }
}

/// Validates, sends once, and records the outcome. Returns false if nothing was sent.
pub async fn submit<T: MailTransport>(form: &mut ContactForm, transport: &T) -> bool {
    let Some(params) = form.begin_submit() else {
        return false;
    };
    let result = transport.send(params).await;
    form.finish_submit(result);
    true
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct FakeTransport {
        sent: Mutex<Vec<TemplateParams>>,
        fail: bool,
    }

    impl FakeTransport {
        fn new(fail: bool) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn sent(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl MailTransport for FakeTransport {
        async fn send(&self, params: TemplateParams) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(params);
            if self.fail {
                Err(MailError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::FullName, "Ada Lovelace");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Phone, "555-0100");
        form.set_field(Field::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  first.last@mail.example.org "));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
    }

    #[tokio::test]
    async fn test_empty_form_has_four_errors_and_sends_nothing() {
        let transport = FakeTransport::new(false);
        let mut form = ContactForm::new();
        assert!(!submit(&mut form, &transport).await);
        assert_eq!(form.errors().len(), 4);
        assert_eq!(transport.sent(), 0);
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set_field(Field::Message, "   \n");
        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.errors().keys().copied().collect::<Vec<_>>(),
            vec![Field::Message]
        );
    }

    #[tokio::test]
    async fn test_invalid_email_is_the_only_error() {
        let transport = FakeTransport::new(false);
        let mut form = filled();
        form.set_field(Field::Email, "abc");
        assert!(!submit(&mut form, &transport).await);
        assert_eq!(form.errors().len(), 1);
        assert!(form.error(Field::Email).is_some());
        assert_eq!(transport.sent(), 0);
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_none());
        form.set_field(Field::Phone, "5");
        assert!(form.error(Field::Phone).is_none());
        assert_eq!(form.errors().len(), 3);
        // other fields are not revalidated on edit
        form.set_field(Field::FullName, "");
        assert_eq!(form.errors().len(), 2);
    }

    #[tokio::test]
    async fn test_success_sends_once_and_resets() {
        let transport = FakeTransport::new(false);
        let mut form = filled();
        assert!(submit(&mut form, &transport).await);
        assert_eq!(transport.sent(), 1);
        assert_eq!(form.status(), &SubmitStatus::Success);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }

        let sent = transport.sent.lock().unwrap()[0].clone();
        assert_eq!(sent.from_name, "Ada Lovelace");
        assert_eq!(sent.reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_failure_keeps_fields_for_retry() {
        let transport = FakeTransport::new(true);
        let mut form = filled();
        assert!(submit(&mut form, &transport).await);
        assert!(matches!(form.status(), SubmitStatus::Failure(msg) if msg.contains("500")));
        assert_eq!(form.value(Field::FullName), "Ada Lovelace");

        // manual retry goes through again
        let transport = FakeTransport::new(false);
        assert!(submit(&mut form, &transport).await);
        assert_eq!(form.status(), &SubmitStatus::Success);
    }

    #[test]
    fn test_submit_is_not_reentrant() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.status().is_sending());
        assert!(form.begin_submit().is_none());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_stray_result_without_send_is_ignored() {
        let mut form = filled();
        form.finish_submit(Ok(()));
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.value(Field::Email), "ada@example.com");
    }
}
