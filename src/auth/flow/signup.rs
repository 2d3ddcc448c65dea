use crate::account::{types::RegisterRequest, AccountClient};
use crate::auth::events::{EventSender, Route, UiEvent};
use crate::auth::flow::{emit, toast_error, toast_success, FlowState, Submission};
use crate::auth::password::{evaluate, PasswordStrength};
use crate::auth::validate::{
    passwords_match, valid_email, ValidationErrors, EMAIL_INVALID, PASSWORDS_MISMATCH,
    PASSWORD_WEAK,
};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::warn;

/// Toast shown when the account was created.
pub const SIGNUP_SUCCESS: &str = "Your account has been created successfully. \
    You will be redirected to the login page in 5 seconds.";

/// Fallback when the service rejects the registration without a message.
pub const SIGNUP_FAILED: &str = "Signup failed";

/// Toast shown when the request never got an answer.
pub const SIGNUP_ERROR: &str = "An error occurred. Please try again.";

/// Delay between a successful signup and the navigation to login.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(5);

/// One-shot scheduled navigation to the login view.
///
/// Dropping the handle cancels the pending navigation, so no event fires
/// after the owning flow is torn down.
#[derive(Debug)]
pub struct ScheduledRedirect {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledRedirect {
    fn spawn(events: EventSender) -> Self {
        let handle = tokio::spawn(async move {
            time::sleep(REDIRECT_DELAY).await;
            emit(&events, UiEvent::Navigate(Route::Login));
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Cancel the pending navigation.
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Wait until the navigation event has been emitted.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ScheduledRedirect {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Signup flow. Field-level validation errors are retained for inline
/// rendering; on success the flow schedules the redirect to login.
pub struct SignupFlow {
    client: AccountClient,
    events: EventSender,
    state: FlowState,
    first_name: String,
    last_name: String,
    email: String,
    mobile_number: String,
    dob: String,
    address: String,
    password: String,
    confirm_password: String,
    strength: PasswordStrength,
    errors: ValidationErrors,
    redirect: Option<ScheduledRedirect>,
}

impl SignupFlow {
    #[must_use]
    pub fn new(client: AccountClient, events: EventSender) -> Self {
        Self {
            client,
            events,
            state: FlowState::Editing,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            dob: String::new(),
            address: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            strength: PasswordStrength::default(),
            errors: ValidationErrors::new(),
            redirect: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Strength of the current password, recomputed on every change.
    #[must_use]
    pub fn password_strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Field errors from the last submit attempt.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn set_first_name(&mut self, value: &str) {
        self.edit();
        self.first_name = value.to_string();
    }

    pub fn set_last_name(&mut self, value: &str) {
        self.edit();
        self.last_name = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.edit();
        self.email = value.to_string();
    }

    pub fn set_mobile_number(&mut self, value: &str) {
        self.edit();
        self.mobile_number = value.to_string();
    }

    pub fn set_dob(&mut self, value: &str) {
        self.edit();
        self.dob = value.to_string();
    }

    pub fn set_address(&mut self, value: &str) {
        self.edit();
        self.address = value.to_string();
    }

    pub fn set_password(&mut self, value: &str) {
        self.edit();
        self.password = value.to_string();
        self.strength = evaluate(value);
    }

    pub fn set_confirm_password(&mut self, value: &str) {
        self.edit();
        self.confirm_password = value.to_string();
    }

    /// Hand the scheduled redirect to the host, which may await or cancel
    /// it. `None` until a submission succeeded.
    pub fn take_redirect(&mut self) -> Option<ScheduledRedirect> {
        self.redirect.take()
    }

    fn edit(&mut self) {
        if self.state == FlowState::Succeeded {
            self.state = FlowState::Editing;
        }
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        errors.require("firstName", "First name", &self.first_name);
        errors.require("lastName", "Last name", &self.last_name);

        if !valid_email(self.email.trim()) {
            errors.insert("email", EMAIL_INVALID);
        }

        errors.require("mobileNumber", "Mobile number", &self.mobile_number);
        errors.require("dob", "Date of birth", &self.dob);
        errors.require("address", "Address", &self.address);

        if !self.strength.is_valid() {
            errors.insert("password", PASSWORD_WEAK);
        }

        if !passwords_match(&self.password, &self.confirm_password) {
            errors.insert("retypePassword", PASSWORDS_MISMATCH);
        }

        errors
    }

    fn clear_draft(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.mobile_number.clear();
        self.dob.clear();
        self.address.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.strength = PasswordStrength::default();
    }

    /// Submit the draft: at most one request, exactly one outcome.
    pub async fn submit(&mut self) -> Submission {
        if self.state == FlowState::Submitting {
            return Submission::InFlight;
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            return Submission::Rejected;
        }

        self.state = FlowState::Submitting;

        let request = RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            dob: self.dob.trim().to_string(),
            address: self.address.trim().to_string(),
            password: self.password.clone(),
        };

        match self.client.register(&request).await {
            Ok(()) => {
                toast_success(&self.events, SIGNUP_SUCCESS);
                self.redirect = Some(ScheduledRedirect::spawn(self.events.clone()));
                self.state = FlowState::Succeeded;
                self.clear_draft();
                Submission::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "signup failed");
                let message = if err.is_rejection() {
                    err.server_message().unwrap_or(SIGNUP_FAILED).to_string()
                } else {
                    SIGNUP_ERROR.to_string()
                };
                toast_error(&self.events, message);
                self.state = FlowState::Editing;
                Submission::Failed
            }
        }
    }
}
