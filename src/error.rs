use thiserror::Error;

/// Errors that can occur while parsing a legacy textual predicate expression.
///
/// These never escape a conversion: the condition codec logs the failure and
/// treats the owning group as carrying no predicates, which downstream
/// consumers read as "always true".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected character '{found}' at byte {at}")]
    UnexpectedChar { found: char, at: usize },

    #[error("Unterminated {what} starting at byte {at}")]
    Unterminated { what: &'static str, at: usize },

    #[error("Expected {expected}, found {found} at byte {at}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        at: usize,
    },

    #[error("Trailing input after the predicate at byte {at}")]
    TrailingInput { at: usize },
}
