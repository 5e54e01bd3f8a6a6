//! Login event loop.
//!
//! Page events arrive on a channel and are handled strictly one at a time;
//! each handler runs to completion before the next event is read.

use secrecy::SecretString;
use tokio::sync::mpsc;

use crate::login::{ActionButton, ErrorDisplay, LoginForm, PasswordField, VisibilityIndicator};

#[derive(Debug)]
pub enum LoginEvent {
    /// The field value changed.
    Input(SecretString),
    ToggleClick,
    ContinueClick,
}

/// Why the event loop stopped.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Continue was clicked with a password that passes every rule.
    Submitted(SecretString),
    /// Every event sender was dropped.
    Closed,
}

/// Dispatches events to `form` until a password is submitted or the
/// channel closes.
pub async fn run_login_events<F, I, E, B>(
    form: &mut LoginForm<F, I, E, B>,
    mut rx: mpsc::Receiver<LoginEvent>,
) -> LoginOutcome
where
    F: PasswordField,
    I: VisibilityIndicator,
    E: ErrorDisplay,
    B: ActionButton,
{
    #[cfg(feature = "tracing")]
    tracing::info!("login event loop started");

    loop {
        let Some(event) = rx.recv().await else {
            #[cfg(feature = "tracing")]
            tracing::info!("login event channel closed");
            return LoginOutcome::Closed;
        };

        match event {
            LoginEvent::Input(value) => {
                form.field_mut().set_value(value);
                form.on_password_input();
            }
            LoginEvent::ToggleClick => {
                form.on_toggle_click();
            }
            LoginEvent::ContinueClick => match form.on_continue_click() {
                Ok(password) => return LoginOutcome::Submitted(password),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("continue ignored: {}", _e);
                }
            },
        }
    }
}
