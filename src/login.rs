//! Login page behaviour: password visibility toggle and policy gating.
//!
//! Page elements are injected through small traits so the handlers never
//! look anything up themselves. A browser host implements the traits over
//! real DOM nodes; tests implement them over plain structs.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::{can_continue, PasswordPolicy, ValidationResult};
use crate::render::ErrorRender;

const OBSCURED_INPUT_TYPE: &str = "password";
const PLAIN_INPUT_TYPE: &str = "text";

/// The password input element.
pub trait PasswordField {
    fn value(&self) -> SecretString;
    fn set_value(&mut self, value: SecretString);
    /// Current `type` attribute.
    fn input_type(&self) -> String;
    fn set_input_type(&mut self, input_type: &str);
}

/// Glyph shown next to the field telling the user what a click will do.
pub trait VisibilityIndicator {
    fn set_glyph(&mut self, glyph: Glyph);
}

/// Element listing policy violations.
pub trait ErrorDisplay {
    fn render(&mut self, render: &ErrorRender);
}

/// The "continue" button.
pub trait ActionButton {
    fn set_disabled(&mut self, disabled: bool);
}

/// Display mode of the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Obscured,
    Plain,
}

impl Visibility {
    /// Anything other than `"password"` counts as plain text.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == OBSCURED_INPUT_TYPE {
            Visibility::Obscured
        } else {
            Visibility::Plain
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Visibility::Obscured => OBSCURED_INPUT_TYPE,
            Visibility::Plain => PLAIN_INPUT_TYPE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Visibility::Obscured => Visibility::Plain,
            Visibility::Plain => Visibility::Obscured,
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            Visibility::Obscured => Glyph::Hidden,
            Visibility::Plain => Glyph::Visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Field is obscured.
    Hidden,
    /// Field shows plain text.
    Visible,
}

impl Glyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Hidden => "👁",
            Glyph::Visible => "🙈",
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Password does not meet policy ({} violations)", .0.len())]
    PolicyViolations(ValidationResult),
    #[error("New passwords must match.")]
    Mismatch,
}

/// Flips the field between obscured and plain text and syncs the glyph.
///
/// Returns the new visibility.
pub fn toggle_visibility<F, I>(field: &mut F, indicator: &mut I) -> Visibility
where
    F: PasswordField + ?Sized,
    I: VisibilityIndicator + ?Sized,
{
    let next = Visibility::from_input_type(&field.input_type()).toggled();
    field.set_input_type(next.input_type());
    indicator.set_glyph(next.glyph());
    next
}

/// Renders `result` and gates the continue button on it.
pub fn apply_validation<E, B>(result: &ValidationResult, display: &mut E, button: &mut B)
where
    E: ErrorDisplay + ?Sized,
    B: ActionButton + ?Sized,
{
    display.render(&ErrorRender::from_result(result));
    button.set_disabled(!can_continue(result));
}

/// Checks a change-password confirmation field against the new password.
pub fn confirm_password(new: &SecretString, confirm: &SecretString) -> Result<(), FormError> {
    if new.expose_secret() != confirm.expose_secret() {
        return Err(FormError::Mismatch);
    }
    Ok(())
}

/// Login form wired to its page elements.
pub struct LoginForm<F, I, E, B> {
    policy: PasswordPolicy,
    field: F,
    indicator: I,
    error_display: E,
    continue_button: B,
}

impl<F, I, E, B> LoginForm<F, I, E, B>
where
    F: PasswordField,
    I: VisibilityIndicator,
    E: ErrorDisplay,
    B: ActionButton,
{
    pub fn new(policy: PasswordPolicy, field: F, indicator: I, error_display: E, continue_button: B) -> Self {
        Self {
            policy,
            field,
            indicator,
            error_display,
            continue_button,
        }
    }

    /// Click on the visibility toggle.
    pub fn on_toggle_click(&mut self) -> Visibility {
        toggle_visibility(&mut self.field, &mut self.indicator)
    }

    /// Input change on the password field.
    pub fn on_password_input(&mut self) -> ValidationResult {
        let result = self.policy.evaluate(&self.field.value());
        apply_validation(&result, &mut self.error_display, &mut self.continue_button);
        result
    }

    /// Click on the continue button.
    ///
    /// Re-evaluates the current value; the password is handed out only when
    /// no rule fails.
    pub fn on_continue_click(&mut self) -> Result<SecretString, FormError> {
        let result = self.on_password_input();
        if !result.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::debug!(violations = result.len(), "continue rejected");
            return Err(FormError::PolicyViolations(result));
        }
        Ok(self.field.value())
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn error_display(&self) -> &E {
        &self.error_display
    }

    pub fn continue_button(&self) -> &B {
        &self.continue_button
    }

    pub fn into_parts(self) -> (F, I, E, B) {
        (self.field, self.indicator, self.error_display, self.continue_button)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory page elements.

    use super::*;

    #[derive(Debug)]
    pub struct FakeField {
        pub value: String,
        pub input_type: String,
    }

    impl FakeField {
        pub fn new(value: &str) -> Self {
            Self {
                value: value.to_string(),
                input_type: OBSCURED_INPUT_TYPE.to_string(),
            }
        }
    }

    impl PasswordField for FakeField {
        fn value(&self) -> SecretString {
            SecretString::new(self.value.as_str().into())
        }

        fn set_value(&mut self, value: SecretString) {
            self.value = value.expose_secret().to_string();
        }

        fn input_type(&self) -> String {
            self.input_type.clone()
        }

        fn set_input_type(&mut self, input_type: &str) {
            self.input_type = input_type.to_string();
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeIndicator {
        pub glyph: Option<Glyph>,
    }

    impl VisibilityIndicator for FakeIndicator {
        fn set_glyph(&mut self, glyph: Glyph) {
            self.glyph = Some(glyph);
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeDisplay {
        pub html: String,
        pub color: Option<&'static str>,
        pub renders: usize,
    }

    impl ErrorDisplay for FakeDisplay {
        fn render(&mut self, render: &ErrorRender) {
            self.html = render.to_html();
            self.color = render.color();
            self.renders += 1;
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeButton {
        pub disabled: bool,
    }

    impl ActionButton for FakeButton {
        fn set_disabled(&mut self, disabled: bool) {
            self.disabled = disabled;
        }
    }

    pub type FakeForm = LoginForm<FakeField, FakeIndicator, FakeDisplay, FakeButton>;

    pub fn fake_form(value: &str) -> FakeForm {
        LoginForm::new(
            PasswordPolicy::default(),
            FakeField::new(value),
            FakeIndicator::default(),
            FakeDisplay::default(),
            FakeButton::default(),
        )
    }
}
