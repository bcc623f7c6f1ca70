//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the configuration source.
///
/// A diagnostic usually carries one primary label on the offending token.
/// Secondary labels point at related context, such as the directive the
/// token belongs to.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(12..17), "malformed range");

        assert_eq!(label.span(), Span::new(12..17));
        assert_eq!(label.message(), "malformed range");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..20), "in this directive");

        assert!(label.is_secondary());
        assert_eq!(label.span().start(), 0);
    }
}
