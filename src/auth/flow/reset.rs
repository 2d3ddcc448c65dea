use crate::account::{types::ResetPasswordRequest, AccountClient};
use crate::auth::events::EventSender;
use crate::auth::flow::{toast_error, toast_success, FlowState, Submission};
use crate::auth::password::{evaluate, PasswordStrength};
use crate::auth::validate::{passwords_match, valid_email, EMAIL_INVALID};
use tracing::warn;

/// Toast shown when the password was replaced.
pub const RESET_SUCCESS: &str = "Password has been reset successfully.";

/// Fallback when the service rejects the reset without a message.
pub const RESET_FAILED: &str = "Failed to reset password. Please try again.";

/// Toast shown when the request never got an answer.
pub const RESET_ERROR: &str = "An error occurred. Please try again later.";

/// Toast shown when the local password requirements block submission.
pub const RESET_REQUIREMENTS: &str =
    "Please ensure all password requirements are met and passwords match.";

/// Label for a positive live match indicator.
pub const PASSWORDS_MATCH_LABEL: &str = "Passwords match";

/// Password reset flow. Clears its draft on success and never navigates;
/// the settled flow reopens as soon as a field changes.
pub struct ResetFlow {
    client: AccountClient,
    events: EventSender,
    state: FlowState,
    email: String,
    new_password: String,
    confirm_password: String,
    strength: PasswordStrength,
}

impl ResetFlow {
    #[must_use]
    pub fn new(client: AccountClient, events: EventSender) -> Self {
        Self {
            client,
            events,
            state: FlowState::Editing,
            email: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
            strength: PasswordStrength::default(),
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

    /// Strength of the new password, recomputed on every change.
    #[must_use]
    pub fn password_strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Live confirmation indicator: `None` until the confirmation field
    /// has content, then whether it equals the new password.
    #[must_use]
    pub fn match_indicator(&self) -> Option<bool> {
        if self.confirm_password.is_empty() {
            None
        } else {
            Some(passwords_match(&self.new_password, &self.confirm_password))
        }
    }

    pub fn set_email(&mut self, value: &str) {
        self.edit();
        self.email = value.to_string();
    }

    pub fn set_new_password(&mut self, value: &str) {
        self.edit();
        self.new_password = value.to_string();
        self.strength = evaluate(value);
    }

    pub fn set_confirm_password(&mut self, value: &str) {
        self.edit();
        self.confirm_password = value.to_string();
    }

    fn edit(&mut self) {
        if self.state == FlowState::Succeeded {
            self.state = FlowState::Editing;
        }
    }

    fn clear_draft(&mut self) {
        self.email.clear();
        self.new_password.clear();
        self.confirm_password.clear();
        self.strength = PasswordStrength::default();
    }

    /// Submit the draft: at most one request, exactly one outcome.
    pub async fn submit(&mut self) -> Submission {
        if self.state == FlowState::Submitting {
            return Submission::InFlight;
        }

        let email = self.email.trim().to_string();
        if !valid_email(&email) {
            toast_error(&self.events, EMAIL_INVALID);
            return Submission::Rejected;
        }
        if !self.strength.is_valid()
            || !passwords_match(&self.new_password, &self.confirm_password)
        {
            toast_error(&self.events, RESET_REQUIREMENTS);
            return Submission::Rejected;
        }

        self.state = FlowState::Submitting;

        let request = ResetPasswordRequest {
            email,
            new_password: self.new_password.clone(),
        };

        match self.client.reset_password(&request).await {
            Ok(()) => {
                toast_success(&self.events, RESET_SUCCESS);
                self.state = FlowState::Succeeded;
                self.clear_draft();
                Submission::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "password reset failed");
                let message = if err.is_rejection() {
                    err.server_message().unwrap_or(RESET_FAILED).to_string()
                } else {
                    RESET_ERROR.to_string()
                };
                toast_error(&self.events, message);
                self.state = FlowState::Editing;
                Submission::Failed
            }
        }
    }
}
