//! Presentation-neutral events emitted by the auth flows.
//!
//! Flows never render anything. They push [`UiEvent`]s into an unbounded
//! channel and the host (CLI, GUI shell, tests) decides what a toast or a
//! navigation request looks like. Send failures mean the host is gone and
//! are ignored.

use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient, non-blocking user notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Views a flow can ask the host to navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Toast(Toast),
    Navigate(Route),
}

pub type EventSender = mpsc::UnboundedSender<UiEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Build the event channel a host hands to its flows.
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
