mod sanitize;

pub use sanitize::sanitize;

use regex::Regex;
use std::{sync::LazyLock, time::Duration};
use thiserror::Error;

use crate::content::OWNER_NAME;
use crate::email::{DeliveryError, DeliveryReceipt, EmailConfig, EmailGateway, EmailPayload};

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 5000;

/// Time a success banner stays up before the form clears itself.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

pub const DEFAULT_SUBJECT: &str = "New contact message";
pub const DELIVERED: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name` attribute of the matching input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            other => Err(FieldError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown form field: {0}")]
pub struct FieldError(pub String);

/// Rules run in declaration order and the first failure wins.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must contain at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must contain at least 10 characters")]
    MessageTooShort,
    #[error("Message is too long (max 5000 characters)")]
    MessageTooLong,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < NAME_MIN_LEN {
            return Err(ValidationError::NameTooShort);
        }
        if self.email.trim().is_empty() || !EMAIL_PATTERN.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MESSAGE_MIN_LEN {
            return Err(ValidationError::MessageTooShort);
        }
        if self.message.chars().count() > MESSAGE_MAX_LEN {
            return Err(ValidationError::MessageTooLong);
        }
        Ok(())
    }

    /// Sanitized projection of the fields. The fields themselves are untouched.
    pub fn to_payload(&self, to_name: &str) -> EmailPayload {
        let subject = match sanitize(&self.subject) {
            s if s.is_empty() => DEFAULT_SUBJECT.to_string(),
            s => s,
        };
        EmailPayload {
            from_name: sanitize(&self.name),
            from_email: sanitize(&self.email),
            subject,
            message: sanitize(&self.message),
            to_name: to_name.to_string(),
            reply_to: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(m) | Self::Error(m) => Some(m),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(Blocked),
    Delivered { reset_after: Duration },
    Failed(DeliveryError),
}

impl SubmitOutcome {
    pub fn reset_after(&self) -> Option<Duration> {
        match self {
            Self::Delivered { reset_after } => Some(*reset_after),
            _ => None,
        }
    }
}

/// Owns everything the contact form displays.
///
/// A submission is split in two halves around the network call so a reactive
/// owner can release its borrow while the request is in flight:
/// [`begin_submit`](Self::begin_submit) validates and hands out the payload,
/// [`finish_submit`](Self::finish_submit) records the result and always
/// clears the loading flag. [`submit`](Self::submit) runs both around a
/// gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    loading: bool,
    focused: Option<Field>,
    recipient: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(OWNER_NAME)
    }
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmissionStatus::None,
            loading: false,
            focused: None,
            recipient: recipient.into(),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn set_focused(&mut self, field: Option<Field>) {
        self.focused = field;
    }

    pub fn message_len(&self) -> usize {
        self.fields.message.chars().count()
    }

    /// Stores the value as typed. An error banner is dismissed on the first edit.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        if self.status.is_error() {
            self.status = SubmissionStatus::None;
        }
    }

    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let field = Field::try_from(name)?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<EmailPayload, Blocked> {
        if self.loading {
            return Err(Blocked::InFlight);
        }
        if let Err(err) = self.fields.validate() {
            self.status = SubmissionStatus::Error(err.to_string());
            return Err(err.into());
        }
        self.loading = true;
        self.status = SubmissionStatus::None;
        Ok(self.fields.to_payload(&self.recipient))
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<DeliveryReceipt, DeliveryError>,
    ) -> SubmitOutcome {
        self.loading = false;
        match outcome {
            Ok(receipt) => {
                log::info!("contact message delivered: {} {}", receipt.status, receipt.text);
                self.status = SubmissionStatus::Success(DELIVERED.to_string());
                SubmitOutcome::Delivered {
                    reset_after: RESET_DELAY,
                }
            }
            Err(err) => {
                log::error!("contact message not delivered: {err}");
                self.status = SubmissionStatus::Error(err.user_message().to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub async fn submit<G: EmailGateway>(
        &mut self,
        gateway: &G,
        config: &EmailConfig,
    ) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        let outcome = gateway.send(&payload, config).await;
        self.finish_submit(outcome)
    }

    /// Clears fields, status and focus. The loading flag is left alone so a
    /// late reset cannot unlock a request that is still in flight.
    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
        self.status = SubmissionStatus::None;
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::DELIVERY_FAILED;
    use proptest::prelude::*;
    use std::cell::RefCell;

    struct RecordingGateway {
        sent: RefCell<Vec<EmailPayload>>,
        result: Result<DeliveryReceipt, DeliveryError>,
    }

    impl RecordingGateway {
        fn ok() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                result: Ok(DeliveryReceipt {
                    status: 200,
                    text: "OK".to_string(),
                }),
            }
        }

        fn failing() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                result: Err(DeliveryError::Network("connection refused".to_string())),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl EmailGateway for RecordingGateway {
        async fn send(
            &self,
            payload: &EmailPayload,
            _config: &EmailConfig,
        ) -> Result<DeliveryReceipt, DeliveryError> {
            self.sent.borrow_mut().push(payload.clone());
            self.result.clone()
        }
    }

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new("Salma El Rhaiti");
        form.update_field(Field::Name, name);
        form.update_field(Field::Email, email);
        form.update_field(Field::Subject, subject);
        form.update_field(Field::Message, message);
        form
    }

    fn valid() -> ContactForm {
        filled("Ada Lovelace", "ada@example.com", "Hello", "I would like to talk.")
    }

    #[test]
    fn test_defaults_are_empty() {
        let form = ContactForm::default();
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.status(), &SubmissionStatus::None);
        assert!(!form.is_loading());
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(Field::try_from(field.as_str()), Ok(field));
        }
        assert_eq!(
            Field::try_from("phone"),
            Err(FieldError("phone".to_string()))
        );
    }

    #[test]
    fn test_update_named_rejects_unknown_field() {
        let mut form = valid();
        let before = form.clone();
        assert!(form.update_named("phone", "555").is_err());
        assert_eq!(form, before);
        form.update_named("subject", "Hi").unwrap();
        assert_eq!(form.field(Field::Subject), "Hi");
    }

    #[test]
    fn test_validation_order() {
        let form = filled("A", "nope", "", "short");
        assert_eq!(form.fields().validate(), Err(ValidationError::NameTooShort));
        let form = filled("Ada", "nope", "", "short");
        assert_eq!(form.fields().validate(), Err(ValidationError::InvalidEmail));
        let form = filled("Ada", "ada@example.com", "", "short");
        assert_eq!(form.fields().validate(), Err(ValidationError::MessageTooShort));
        assert_eq!(valid().fields().validate(), Ok(()));
    }

    #[test]
    fn test_name_is_measured_trimmed() {
        let form = filled("  a  ", "ada@example.com", "", "long enough message");
        assert_eq!(form.fields().validate(), Err(ValidationError::NameTooShort));
        let form = filled(" Al ", "ada@example.com", "", "long enough message");
        assert_eq!(form.fields().validate(), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        let bad = [
            "",
            "   ",
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "ada@@example.com",
            "ada lovelace@example.com",
            " ada@example.com",
            "ada@example.com ",
            "ada@exa mple.com",
        ];
        for email in bad {
            let form = filled("Ada", email, "", "long enough message");
            assert_eq!(
                form.fields().validate(),
                Err(ValidationError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
        for email in ["ada@example.com", "a.b+c@sub.example.co.uk", "x@y.z"] {
            let form = filled("Ada", email, "", "long enough message");
            assert_eq!(form.fields().validate(), Ok(()), "{email:?} should pass");
        }
    }

    #[test]
    fn test_message_bounds() {
        let at_min = "a".repeat(MESSAGE_MIN_LEN);
        let below_min = "a".repeat(MESSAGE_MIN_LEN - 1);
        let at_max = "a".repeat(MESSAGE_MAX_LEN);
        let above_max = "a".repeat(MESSAGE_MAX_LEN + 1);
        let check = |message: &str| filled("Ada", "ada@example.com", "", message).fields().validate();
        assert_eq!(check(&at_min), Ok(()));
        assert_eq!(check(&at_max), Ok(()));
        assert_eq!(check(&below_min), Err(ValidationError::MessageTooShort));
        assert_eq!(check(&above_max), Err(ValidationError::MessageTooLong));
        let padded = format!("   {below_min}   ");
        assert_eq!(check(&padded), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn test_lengths_count_characters() {
        let form = filled("Zoé", "zoe@example.com", "", &"é".repeat(MESSAGE_MAX_LEN));
        assert_eq!(form.message_len(), MESSAGE_MAX_LEN);
        assert_eq!(form.fields().validate(), Ok(()));
    }

    #[test]
    fn test_payload_is_sanitized_projection() {
        let form = filled(
            "<b>Ada</b>",
            "ada@example.com",
            "  ",
            "Hi<script>alert(1)</script> there, friend",
        );
        let payload = form.fields().to_payload("Salma El Rhaiti");
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.subject, DEFAULT_SUBJECT);
        assert_eq!(payload.message, "Hi there, friend");
        assert_eq!(payload.to_name, "Salma El Rhaiti");
        assert_eq!(payload.reply_to, "ada@example.com");
        // displayed state keeps what was typed
        assert_eq!(form.field(Field::Name), "<b>Ada</b>");
    }

    #[test]
    fn test_subject_kept_when_present() {
        let payload = filled("Ada", "ada@example.com", " <i>Job offer</i> ", "long enough message")
            .fields()
            .to_payload("Salma El Rhaiti");
        assert_eq!(payload.subject, "Job offer");
    }

    #[test]
    fn test_edit_clears_error_only() {
        let mut form = filled("A", "ada@example.com", "Hi", "long enough message");
        assert!(form.begin_submit().is_err());
        assert!(form.status().is_error());
        form.update_field(Field::Name, "Ad");
        assert_eq!(form.status(), &SubmissionStatus::None);
        assert_eq!(form.field(Field::Email), "ada@example.com");
        assert_eq!(form.field(Field::Subject), "Hi");
        assert_eq!(form.field(Field::Message), "long enough message");

        let mut form = valid();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(DeliveryReceipt {
            status: 200,
            text: "OK".to_string(),
        }));
        form.update_field(Field::Subject, "Another");
        assert!(form.status().is_success());
    }

    #[test]
    fn test_second_submit_while_loading_is_blocked() {
        let mut form = valid();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_loading());
        assert_eq!(form.status(), &SubmissionStatus::None);
        assert_eq!(form.begin_submit(), Err(Blocked::InFlight));
    }

    #[test]
    fn test_reset_clears_everything_but_loading() {
        let mut form = valid();
        form.set_focused(Some(Field::Message));
        form.begin_submit().unwrap();
        form.reset();
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.focused(), None);
        assert!(form.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_name_never_reaches_gateway() {
        let gateway = RecordingGateway::ok();
        let mut form = filled("A", "ada@example.com", "", "long enough message");
        let outcome = form.submit(&gateway, &EmailConfig::default()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked(Blocked::Invalid(ValidationError::NameTooShort))
        );
        assert_eq!(
            form.status(),
            &SubmissionStatus::Error("Name must contain at least 2 characters".to_string())
        );
        assert_eq!(gateway.calls(), 0);
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_email_never_reaches_gateway() {
        let gateway = RecordingGateway::ok();
        let mut form = filled("Ada", "ada@example", "", "long enough message");
        form.submit(&gateway, &EmailConfig::default()).await;
        assert_eq!(
            form.status(),
            &SubmissionStatus::Error("Please enter a valid email address".to_string())
        );
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_delivery_then_reset() {
        let gateway = RecordingGateway::ok();
        let mut form = valid();
        let outcome = form.submit(&gateway, &EmailConfig::default()).await;
        assert_eq!(outcome.reset_after(), Some(Duration::from_millis(3000)));
        assert_eq!(form.status(), &SubmissionStatus::Success(DELIVERED.to_string()));
        assert!(!form.is_loading());
        assert_eq!(gateway.calls(), 1);
        assert_eq!(gateway.sent.borrow()[0].from_name, "Ada Lovelace");

        form.reset();
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.status(), &SubmissionStatus::None);
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_input() {
        let gateway = RecordingGateway::failing();
        let mut form = valid();
        let before = form.fields().clone();
        let outcome = form.submit(&gateway, &EmailConfig::default()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(DeliveryError::Network("connection refused".to_string()))
        );
        assert_eq!(outcome.reset_after(), None);
        assert_eq!(
            form.status(),
            &SubmissionStatus::Error(DELIVERY_FAILED.to_string())
        );
        assert!(!form.is_loading());
        assert_eq!(form.fields(), &before);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut form = valid();
        form.submit(&RecordingGateway::failing(), &EmailConfig::default())
            .await;
        let gateway = RecordingGateway::ok();
        let outcome = form.submit(&gateway, &EmailConfig::default()).await;
        assert!(matches!(outcome, SubmitOutcome::Delivered { .. }));
        assert_eq!(gateway.calls(), 1);
    }

    proptest! {
        #[test]
        fn prop_short_names_are_rejected(
            name in "[a-zA-Z]?",
            pad_l in " {0,3}",
            pad_r in " {0,3}",
        ) {
            let name = format!("{pad_l}{name}{pad_r}");
            let form = filled(&name, "ada@example.com", "", "long enough message");
            prop_assert_eq!(form.fields().validate(), Err(ValidationError::NameTooShort));
        }

        #[test]
        fn prop_message_outside_bounds_is_rejected(
            len in prop_oneof![0usize..MESSAGE_MIN_LEN, (MESSAGE_MAX_LEN + 1)..(MESSAGE_MAX_LEN + 50)],
            name in "[a-zA-Z]{0,6}",
            email in "[a-z@.]{0,12}",
        ) {
            let message = "m".repeat(len);
            let form = filled(&name, &email, "", &message);
            prop_assert!(form.fields().validate().is_err());
        }

        #[test]
        fn prop_message_within_bounds_proceeds(len in MESSAGE_MIN_LEN..=MESSAGE_MAX_LEN) {
            let mut form = filled("Ada", "ada@example.com", "", &"m".repeat(len));
            prop_assert!(form.begin_submit().is_ok());
            prop_assert!(form.is_loading());
        }
    }
}
