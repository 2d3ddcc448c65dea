//! Auth flow controllers: per-flow field state, synchronous validation,
//! and the shared submission state machine.
//!
//! Every flow runs `Editing → Submitting → {Succeeded, Failed}`. `Failed`
//! returns to `Editing` with fields retained; `Succeeded` settles until a
//! setter edits the draft again. The `Submitting` state is the
//! single-flight guard: while a request is outstanding, further submits
//! are turned away without touching the network.

mod login;
mod reset;
mod signup;

pub use self::login::LoginFlow;
pub use self::reset::ResetFlow;
pub use self::signup::{ScheduledRedirect, SignupFlow, REDIRECT_DELAY};

use crate::auth::events::{EventSender, Toast, UiEvent};

/// Lifecycle of a flow between user edits and the account service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Submitting,
    Succeeded,
}

/// What a single `submit` call amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Synchronous validation failed; no request was issued.
    Rejected,
    /// A previous submission is still outstanding; no request was issued.
    InFlight,
    /// The request was issued and the service said no, or never answered.
    Failed,
    Succeeded,
}

pub(crate) fn emit(events: &EventSender, event: UiEvent) {
    // The host may already be gone; nothing useful to do then.
    let _ = events.send(event);
}

pub(crate) fn toast_success(events: &EventSender, message: impl Into<String>) {
    emit(events, UiEvent::Toast(Toast::success(message)));
}

pub(crate) fn toast_error(events: &EventSender, message: impl Into<String>) {
    emit(events, UiEvent::Toast(Toast::error(message)));
}
