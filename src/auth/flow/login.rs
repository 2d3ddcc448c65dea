use crate::account::{types::LoginRequest, AccountClient};
use crate::auth::events::{EventSender, Route, UiEvent};
use crate::auth::flow::{emit, toast_error, toast_success, FlowState, Submission};
use crate::auth::password::MIN_LENGTH;
use crate::auth::validate::{valid_email, EMAIL_INVALID, PASSWORD_TOO_SHORT};
use crate::session::Session;
use tracing::warn;

/// Toast shown when login succeeds.
pub const LOGIN_SUCCESS: &str = "Login successful!";

/// Fallback when the service rejects the credentials without a message.
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Toast shown when the request never got an answer.
pub const LOGIN_ERROR: &str = "An error occurred during login. Please try again.";

/// Login flow. On success it persists the session marker and asks the
/// host to navigate to the authenticated home view.
pub struct LoginFlow {
    client: AccountClient,
    session: Session,
    events: EventSender,
    state: FlowState,
    email: String,
    password: String,
}

impl LoginFlow {
    #[must_use]
    pub fn new(client: AccountClient, session: Session, events: EventSender) -> Self {
        Self {
            client,
            session,
            events,
            state: FlowState::Editing,
            email: String::new(),
            password: String::new(),
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

    pub fn set_email(&mut self, email: &str) {
        self.edit();
        self.email = email.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.edit();
        self.password = password.to_string();
    }

    // Editing a settled flow reopens it.
    fn edit(&mut self) {
        if self.state == FlowState::Succeeded {
            self.state = FlowState::Editing;
        }
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
        if self.password.chars().count() < MIN_LENGTH {
            toast_error(&self.events, PASSWORD_TOO_SHORT);
            return Submission::Rejected;
        }

        self.state = FlowState::Submitting;

        let request = LoginRequest {
            email,
            password: self.password.clone(),
        };

        match self.client.login(&request).await {
            Ok(()) => {
                self.session.set_session(&request.email);
                toast_success(&self.events, LOGIN_SUCCESS);
                emit(&self.events, UiEvent::Navigate(Route::Home));
                self.state = FlowState::Succeeded;
                self.email.clear();
                self.password.clear();
                Submission::Succeeded
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                let message = if err.is_rejection() {
                    err.server_message().unwrap_or(LOGIN_FAILED).to_string()
                } else {
                    LOGIN_ERROR.to_string()
                };
                toast_error(&self.events, message);
                self.state = FlowState::Editing;
                Submission::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::events::{self, EventReceiver, Toast};
    use crate::session::MemoryStore;
    use anyhow::Result;
    use serde_json::json;
    use std::net::TcpListener;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn drain(rx: &mut EventReceiver) -> Vec<UiEvent> {
        let mut received = Vec::new();
        while let Ok(event) = rx.try_recv() {
            received.push(event);
        }
        received
    }

    fn flow_against(uri: &str) -> Result<(LoginFlow, EventReceiver, Session)> {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let client = AccountClient::new(uri)?;
        let (tx, rx) = events::channel();
        Ok((LoginFlow::new(client, session.clone(), tx), rx, session))
    }

    #[tokio::test]
    async fn test_valid_login_issues_one_request() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user/login"))
            .and(body_json(json!({
                "email": "ada@example.com",
                "password": "Abc123!@"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let (mut flow, mut rx, session) = flow_against(&server.uri())?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc123!@");

        assert_eq!(flow.submit().await, Submission::Succeeded);
        assert_eq!(flow.state(), FlowState::Succeeded);
        assert!(session.is_authenticated());
        assert_eq!(session.email(), Some("ada@example.com".to_string()));

        // draft discarded on success
        assert_eq!(flow.email(), "");

        let received = drain(&mut rx);
        assert_eq!(
            received,
            vec![
                UiEvent::Toast(Toast::success(LOGIN_SUCCESS)),
                UiEvent::Navigate(Route::Home),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_short_password_issues_no_request() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (mut flow, mut rx, session) = flow_against(&server.uri())?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc12!@");

        assert_eq!(flow.submit().await, Submission::Rejected);
        assert_eq!(flow.state(), FlowState::Editing);
        assert!(!session.is_authenticated());

        let received = drain(&mut rx);
        assert_eq!(received, vec![UiEvent::Toast(Toast::error(PASSWORD_TOO_SHORT))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected_locally() -> Result<()> {
        let (mut flow, mut rx, _session) = flow_against("http://localhost:8000")?;
        flow.set_email("not-an-email");
        flow.set_password("Abc123!@");

        assert_eq!(flow.submit().await, Submission::Rejected);

        let received = drain(&mut rx);
        assert_eq!(received, vec![UiEvent::Toast(Toast::error(EMAIL_INVALID))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_message() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "bad credentials"
            })))
            .mount(&server)
            .await;

        let (mut flow, mut rx, session) = flow_against(&server.uri())?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc123!@");

        assert_eq!(flow.submit().await, Submission::Failed);
        assert_eq!(flow.state(), FlowState::Editing);
        assert!(!session.is_authenticated());

        // fields retained for manual resubmission
        assert_eq!(flow.email(), "ada@example.com");

        let received = drain(&mut rx);
        assert_eq!(received, vec![UiEvent::Toast(Toast::error("bad credentials"))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (mut flow, mut rx, _session) = flow_against(&server.uri())?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc123!@");

        assert_eq!(flow.submit().await, Submission::Failed);

        let received = drain(&mut rx);
        assert_eq!(received, vec![UiEvent::Toast(Toast::error(LOGIN_FAILED))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_transport_error_uses_generic_message() -> Result<()> {
        // nothing listens on port 9
        let (mut flow, mut rx, _session) = flow_against("http://127.0.0.1:9")?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc123!@");

        assert_eq!(flow.submit().await, Submission::Failed);
        assert_eq!(flow.state(), FlowState::Editing);

        let received = drain(&mut rx);
        assert_eq!(received, vec![UiEvent::Toast(Toast::error(LOGIN_ERROR))]);
        Ok(())
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_turned_away() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (mut flow, mut rx, _session) = flow_against(&server.uri())?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc123!@");
        flow.state = FlowState::Submitting;

        assert_eq!(flow.submit().await, Submission::InFlight);
        assert!(drain(&mut rx).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_editing_reopens_a_settled_flow() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let (mut flow, _rx, _session) = flow_against(&server.uri())?;
        flow.set_email("ada@example.com");
        flow.set_password("Abc123!@");

        assert_eq!(flow.submit().await, Submission::Succeeded);
        assert_eq!(flow.state(), FlowState::Succeeded);

        flow.set_email("grace@example.com");
        assert_eq!(flow.state(), FlowState::Editing);
        Ok(())
    }
}
