pub mod login;
pub mod logout;
pub mod reset;
pub mod signup;
pub mod whoami;

use crate::auth::events::{EventReceiver, Route, Toast, ToastKind, UiEvent};
use tracing::debug;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Signup(signup::Args),
    Reset(reset::Args),
    Logout,
    Whoami,
}

// Drain whatever the flow emitted, in arrival order.
pub(crate) fn render_events(events: &mut EventReceiver) {
    while let Ok(event) = events.try_recv() {
        render(&event);
    }
}

fn render(event: &UiEvent) {
    match event {
        UiEvent::Toast(Toast {
            kind: ToastKind::Success,
            message,
        }) => println!("{message}"),
        UiEvent::Toast(Toast {
            kind: ToastKind::Error,
            message,
        }) => eprintln!("{message}"),
        UiEvent::Navigate(Route::Home) => debug!("navigate: home"),
        UiEvent::Navigate(Route::Login) => {
            println!("You can now sign in with `ecowatch login`.");
        }
    }
}
