use thiserror::Error;

use crate::prelude::Span;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Expected '.' after lambda parameters")]
    MissingDot,
    #[error("Expected closing parenthesis")]
    UnclosedParen,
    #[error("Unexpected term")]
    UnexpectedTerm,
    #[error("Unexpected trailing input")]
    TrailingInput,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unexpected character {}", .found.map_or_else(|| "at the end of the input".to_string(), |c| format!("`{c}`")))]
    Lex { found: Option<char>, span: Span },
    #[error("{kind}")]
    Syntax { kind: SyntaxError, span: Span },
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Lex { span, .. } | Error::Syntax { span, .. } => span.clone(),
        }
    }
}
