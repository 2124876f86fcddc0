use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("couldn't reach email relay: {0}")]
    Transport(String),
    #[error("email relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
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

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|&f| self.get(f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Same shape check a browser applies to `type="email"`: `local@domain.tld`.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !s.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Parameters of the EmailJS message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Error,
}

pub trait EmailRelay {
    fn send(&self, params: &TemplateParams) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Contact form state: the four inputs, whether a send is running, and the last outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    recipient: String,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(crate::content::OWNER.email)
    }
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            recipient: recipient.into(),
            submitting: false,
            status: None,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<SubmitStatus> {
        self.status
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Validates the inputs and marks the form as sending.
    ///
    /// Rejected input flips the status to error and leaves the fields as typed.
    pub fn begin_submit(&mut self) -> Result<TemplateParams, ContactError> {
        if self.submitting {
            return Err(ContactError::InFlight);
        }
        if let Err(e) = self.fields.validate() {
            log::debug!("contact form rejected: {e}");
            self.status = Some(SubmitStatus::Error);
            return Err(e);
        }
        self.submitting = true;
        self.status = None;
        Ok(TemplateParams {
            from_name: self.fields.name.trim().to_string(),
            from_email: self.fields.email.trim().to_string(),
            subject: self.fields.subject.trim().to_string(),
            message: self.fields.message.clone(),
            to_email: self.recipient.clone(),
        })
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = Some(SubmitStatus::Success);
            }
            Err(e) => {
                log::error!("Email sending failed: {e}");
                self.status = Some(SubmitStatus::Error);
            }
        }
    }

    /// One attempt against `relay`; there is no retry.
    ///
    /// Rejected input never reaches the relay and comes back as [`SubmitError::Invalid`].
    pub async fn submit<R: EmailRelay>(&mut self, relay: &R) -> Result<(), SubmitError> {
        let params = self.begin_submit()?;
        let outcome = relay.send(&params).await;
        self.finish_submit(outcome.clone());
        outcome
    }
}

/// Request body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams,
}

impl<'a> EmailJsRequest<'a> {
    /// The relay's configured recipient replaces whatever the form addressed.
    pub fn new(config: &'a RelayConfig, params: &TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                to_email: config.recipient.clone(),
                ..params.clone()
            },
        }
    }
}

/// Sends through the EmailJS REST API straight from the browser.
#[cfg(feature = "hydrate")]
pub struct EmailJsRelay {
    config: Option<RelayConfig>,
}

#[cfg(feature = "hydrate")]
impl EmailJsRelay {
    pub fn from_build_env() -> Self {
        Self {
            config: RelayConfig::from_build_env(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), SubmitError> {
        use gloo_net::http::Request;

        let config = self.config.as_ref().ok_or(SubmitError::NotConfigured)?;
        let res = Request::post(&config.endpoint)
            .json(&EmailJsRequest::new(config, params))
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        if res.ok() {
            return Ok(());
        }
        Err(SubmitError::Rejected {
            status: res.status(),
            body: res.text().await.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;

    struct StubRelay {
        outcome: Result<(), SubmitError>,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl StubRelay {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for StubRelay {
        async fn send(&self, params: &TemplateParams) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(params.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new("owner@example.com");
        form.set(Field::Name, "John Doe");
        form.set(Field::Email, " john@example.com ");
        form.set(Field::Subject, "Project inquiry");
        form.set(Field::Message, "Let's build something.");
        form
    }

    #[test]
    fn test_submit_success_clears_fields() {
        let relay = StubRelay::new(Ok(()));
        let mut form = filled();

        assert_eq!(block_on(form.submit(&relay)), Ok(()));
        assert_eq!(form.status(), Some(SubmitStatus::Success));
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(!form.is_submitting());

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_email, "john@example.com");
        assert_eq!(sent[0].to_email, "owner@example.com");
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let err = SubmitError::Rejected {
            status: 400,
            body: "The Public Key is invalid".to_string(),
        };
        let relay = StubRelay::new(Err(err.clone()));
        let mut form = filled();
        let before = form.fields().clone();

        assert_eq!(block_on(form.submit(&relay)), Err(err));
        assert_eq!(form.status(), Some(SubmitStatus::Error));
        assert_eq!(form.fields(), &before);
        assert_eq!(relay.sent.borrow().len(), 1, "no retry");
    }

    #[test]
    fn test_invalid_input_skips_relay() {
        let relay = StubRelay::new(Ok(()));
        let mut form = filled();
        form.set(Field::Subject, "   ");

        assert_eq!(
            block_on(form.submit(&relay)),
            Err(SubmitError::Invalid(ContactError::MissingField(Field::Subject)))
        );
        assert!(relay.sent.borrow().is_empty());
        assert_eq!(form.status(), Some(SubmitStatus::Error));
        assert_eq!(form.fields().message, "Let's build something.");

        let mut empty = ContactForm::default();
        assert_eq!(
            block_on(empty.submit(&relay)),
            Err(SubmitError::Invalid(ContactError::MissingField(Field::Name)))
        );
        assert!(relay.sent.borrow().is_empty());
    }

    #[test]
    fn test_submit_while_in_flight_is_refused() {
        let relay = StubRelay::new(Ok(()));
        let mut form = filled();
        form.begin_submit().expect("fields are valid");

        assert_eq!(
            block_on(form.submit(&relay)),
            Err(SubmitError::Invalid(ContactError::InFlight))
        );
        assert!(relay.sent.borrow().is_empty());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_resubmit_after_error_clears_status() {
        let mut form = filled();
        form.finish_submit(Err(SubmitError::NotConfigured));
        assert_eq!(form.status(), Some(SubmitStatus::Error));

        form.begin_submit().expect("fields are valid");
        assert_eq!(form.status(), None);
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(ContactError::InFlight));
    }

    #[test]
    fn test_single_attempt_per_submit() {
        struct CountingRelay(Cell<usize>);
        impl EmailRelay for CountingRelay {
            async fn send(&self, _: &TemplateParams) -> Result<(), SubmitError> {
                self.0.set(self.0.get() + 1);
                Err(SubmitError::Transport("offline".to_string()))
            }
        }

        let relay = CountingRelay(Cell::new(0));
        let mut form = filled();
        let _ = block_on(form.submit(&relay));
        assert_eq!(relay.0.get(), 1);
    }

    #[test]
    fn test_email_shape() {
        for ok in ["a@b.co", "first.last@mail.example.org"] {
            assert!(looks_like_email(ok), "{ok}");
        }
        for bad in ["", "plain", "@b.co", "a@", "a@b", "a@.com", "a b@c.de", "a@b@c.de", "a@b."] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_missing_field_reported_in_order() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "x@y.z");
        assert_eq!(
            form.fields().validate(),
            Err(ContactError::MissingField(Field::Name))
        );
    }

    fn relay_config(recipient: &str) -> RelayConfig {
        RelayConfig {
            endpoint: crate::config::EMAILJS_ENDPOINT.to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk_z".to_string(),
            recipient: recipient.to_string(),
        }
    }

    #[test]
    fn test_emailjs_uses_configured_recipient() {
        let config = relay_config("me@site.dev");
        let mut form = ContactForm::default();
        form.set(Field::Name, "Jane");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Subject, "Hi");
        form.set(Field::Message, "Hello there");
        let params = form.begin_submit().expect("fields are valid");
        assert_eq!(params.to_email, crate::content::OWNER.email);

        let request = EmailJsRequest::new(&config, &params);
        assert_eq!(request.template_params.to_email, "me@site.dev");
        assert_eq!(request.template_params.from_name, "Jane");
    }

    #[test]
    fn test_emailjs_body() {
        let config = relay_config("owner@example.com");
        let mut form = filled();
        let params = form.begin_submit().expect("fields are valid");
        let body = serde_json::to_value(EmailJsRequest::new(&config, &params))
            .expect("serializes");
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "pk_z");
        assert_eq!(body["template_params"]["from_name"], "John Doe");
        assert_eq!(body["template_params"]["to_email"], "owner@example.com");
    }
}
