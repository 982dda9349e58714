pub mod error;
pub mod lexer;
pub mod parser;
pub mod prelude;
pub mod reduce;
pub mod session;
pub mod substitute;
pub mod term;

use crate::{prelude::*, reduce::Trace, term::TermRef};

/// Outcome of [`evaluate`]: the normal form on success, an `Error: ...`
/// message otherwise.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Evaluation {
    pub text: String,
    pub success: bool,
}

impl From<Result<TermRef>> for Evaluation {
    fn from(result: Result<TermRef>) -> Self {
        match result {
            Ok(term) => Evaluation {
                text: term.to_string(),
                success: true,
            },
            Err(e) => Evaluation {
                text: format!("Error: {e}"),
                success: false,
            },
        }
    }
}

/// Parses `source` and reduces it to normal form, printing each contraction.
pub fn evaluate(source: &str) -> Evaluation {
    evaluate_with(source, &mut reduce::Stdout)
}

pub fn evaluate_with(source: &str, trace: &mut impl Trace) -> Evaluation {
    parser::parse_term(source)
        .map(|term| reduce::beta_reduce(term, trace))
        .into()
}
