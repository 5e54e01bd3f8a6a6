//! Render instructions for the password error display.

use crate::evaluator::ValidationResult;

const BULLET: &str = "• ";
const LINE_BREAK: &str = "<br>";
const ERROR_COLOR: &str = "red";

/// What the error display should show after an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorRender {
    /// No violations: clear the display.
    Clear,
    /// One bulleted line per violation, in rule order.
    Violations { lines: Vec<String> },
}

impl ErrorRender {
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.is_valid() {
            return ErrorRender::Clear;
        }
        ErrorRender::Violations {
            lines: result
                .violations()
                .iter()
                .map(|v| format!("{BULLET}{v}"))
                .collect(),
        }
    }

    /// HTML content for the display element; empty when clearing.
    pub fn to_html(&self) -> String {
        match self {
            ErrorRender::Clear => String::new(),
            ErrorRender::Violations { lines } => lines.join(LINE_BREAK),
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        match self {
            ErrorRender::Clear => None,
            ErrorRender::Violations { .. } => Some(ERROR_COLOR),
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, ErrorRender::Clear)
    }
}

impl From<&ValidationResult> for ErrorRender {
    fn from(result: &ValidationResult) -> Self {
        ErrorRender::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_password;
    use secrecy::SecretString;

    fn render(pwd: &str) -> ErrorRender {
        ErrorRender::from_result(&evaluate_password(&SecretString::new(pwd.into())))
    }

    #[test]
    fn test_render_valid_clears() {
        let r = render("Password123!");
        assert_eq!(r, ErrorRender::Clear);
        assert_eq!(r.to_html(), "");
        assert_eq!(r.color(), None);
    }

    #[test]
    fn test_render_violations_html() {
        let r = render("password123");
        assert_eq!(
            r.to_html(),
            "• One uppercase letter<br>• One special character<br>• Password too common"
        );
        assert_eq!(r.color(), Some("red"));
        assert!(!r.is_clear());
    }

    #[test]
    fn test_render_single_line_has_no_break() {
        let r = render("Ab1! Ab1!");
        assert_eq!(
            r,
            ErrorRender::Violations { lines: vec!["• No spaces allowed".to_string()] }
        );
        assert_eq!(r.to_html(), "• No spaces allowed");
    }
}
