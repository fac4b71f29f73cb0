use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// Simulated network latency before a valid message counts as sent.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// How long the "sent" notice stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

// Deliberately permissive: quoted local parts and the like are rejected.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormValidationError {
    #[error("Please fill out all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// DOM id of the matching input, also used as its label target.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Your email",
            Self::Message => "Your message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    #[cfg(test)]
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

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks the fields in order; the first failing rule wins. Whitespace is
    /// not trimmed, so `" "` counts as filled in.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FormValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormValidationError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredStep {
    /// Simulated delivery finishing.
    Deliver,
    /// Success notice timing out.
    Dismiss,
}

/// Work the host must run later by calling [`ContactForm::fire`] after
/// [`Deferred::delay`] has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    ticket: u64,
    step: DeferredStep,
}

impl Deferred {
    pub fn step(&self) -> DeferredStep {
        self.step
    }

    pub fn delay(&self) -> Duration {
        match self.step {
            DeferredStep::Deliver => SUBMIT_DELAY,
            DeferredStep::Dismiss => SUCCESS_DISPLAY,
        }
    }
}

/// Contact form state machine.
///
/// All transitions are synchronous. Time only enters through [`Deferred`]
/// values: each one carries the ticket that was current when it was issued,
/// and any later accepted submission, a rejection that hides a success notice,
/// or [`ContactForm::cancel`] moves the ticket on so that older deferreds fire
/// as no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    error: Option<FormValidationError>,
    status: FormStatus,
    ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn error(&self) -> Option<FormValidationError> {
        self.error
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == FormStatus::Sent
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Keystroke handler. Clears a pending error but leaves a displayed
    /// success notice alone.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.error = None;
    }

    /// Validates and, on success, starts the simulated delivery. The returned
    /// [`Deferred`] must be scheduled by the caller.
    ///
    /// A rejected submission keeps the entered values and records the error.
    /// A delivery already in flight still lands and clears that error; a
    /// success notice on screen is taken down so the two never show together.
    pub fn submit(&mut self) -> Result<Deferred, FormValidationError> {
        if let Err(err) = self.fields.validate() {
            self.error = Some(err);
            if self.status == FormStatus::Sent {
                self.status = FormStatus::Idle;
                self.ticket += 1;
            }
            return Err(err);
        }
        self.error = None;
        self.status = FormStatus::Submitting;
        Ok(self.issue(DeferredStep::Deliver))
    }

    /// Runs a scheduled step. Returns the follow-up step to schedule, if any.
    pub fn fire(&mut self, deferred: Deferred) -> Option<Deferred> {
        if deferred.ticket != self.ticket {
            return None;
        }
        match (deferred.step, self.status) {
            (DeferredStep::Deliver, FormStatus::Submitting) => {
                self.fields.clear();
                self.error = None;
                self.status = FormStatus::Sent;
                Some(self.issue(DeferredStep::Dismiss))
            }
            (DeferredStep::Dismiss, FormStatus::Sent) => {
                self.status = FormStatus::Idle;
                None
            }
            _ => None,
        }
    }

    /// Invalidates every outstanding [`Deferred`]. Called when the form is
    /// torn down.
    pub fn cancel(&mut self) {
        self.ticket += 1;
    }

    fn issue(&mut self, step: DeferredStep) -> Deferred {
        self.ticket += 1;
        Deferred {
            ticket: self.ticket,
            step,
        }
    }
}
