//! Login password policy library
//!
//! This library provides the client-side behaviour of the meal-planner
//! login and dashboard pages: a password policy checklist that gates the
//! continue button, a password visibility toggle, and dashboard rendering.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-driven login event loop
//! - `tracing`: Enables logging via tracing crate
//!
//! # Denylist
//!
//! The built-in denylist is always active. A host can add entries from a
//! file with [`Denylist::from_path`] and pass the result to
//! [`PasswordPolicy::new`].
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password, ErrorRender, Violation};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("password123".into());
//! let result = evaluate_password(&password);
//!
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.violations(),
//!     &[Violation::NoUppercase, Violation::NoSpecialChar, Violation::TooCommon]
//! );
//! println!("{}", ErrorRender::from_result(&result).to_html());
//! ```

mod dashboard;
mod denylist;
mod evaluator;
mod login;
mod render;
mod rules;

#[cfg(feature = "async")]
mod events;

// Public API
pub use dashboard::{
    load_user_data, render_recipe_card, render_recipe_grid, DashboardError, DashboardSlot,
    DashboardView, RecipeSummary, UserData, UserStats,
};
pub use denylist::{Denylist, DenylistError, BUILTIN_DENYLIST};
pub use evaluator::{can_continue, evaluate_password, PasswordPolicy, ValidationResult};
pub use login::{
    apply_validation, confirm_password, toggle_visibility, ActionButton, ErrorDisplay, FormError,
    Glyph, LoginForm, PasswordField, Visibility, VisibilityIndicator,
};
pub use render::ErrorRender;
pub use rules::{
    denylist_rule, digit_rule, length_rule, lowercase_rule, special_char_rule, uppercase_rule,
    whitespace_rule, RuleResult, Violation, MIN_LENGTH, SPECIAL_CHARS,
};

#[cfg(feature = "async")]
pub use events::{run_login_events, LoginEvent, LoginOutcome};
