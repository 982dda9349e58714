use chumsky::{
    prelude::{choice, end, filter, just, Simple},
    text::TextParser,
    Parser,
};

use crate::prelude::*;

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
pub enum Token {
    #[display(fmt = "λ")]
    Lambda,
    #[display(fmt = ".")]
    Dot,
    #[display(fmt = "(")]
    LParen,
    #[display(fmt = ")")]
    RParen,
    #[display(fmt = "{_0}")]
    Var(char),
    #[display(fmt = "end of the input")]
    End,
}

/// Every character outside whitespace and decimal digits that is not one of
/// the reserved glyphs names a variable.
fn is_variable(c: &char) -> bool {
    !c.is_whitespace() && !c.is_ascii_digit()
}

fn lexer() -> impl Parser<char, Vec<Spanned<Token>>, Error = Simple<char>> {
    let token = choice((
        just('λ').to(Token::Lambda),
        just('.').to(Token::Dot),
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        filter(is_variable).map(Token::Var),
    ));
    token
        .map_with_span(|value, span| Spanned { span, value })
        .padded()
        .repeated()
        .then_ignore(end())
}

/// Splits `source` into tokens. The result always ends with a single
/// [`Token::End`] spanning one past the last character.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<Token>>> {
    let len = source.chars().count();
    let mut tokens = lexer().parse(source).map_err(|es| {
        es.into_iter()
            .next()
            .map(|e| Error::Lex {
                found: e.found().copied(),
                span: e.span(),
            })
            .unwrap_or(Error::Lex {
                found: None,
                span: len..len + 1,
            })
    })?;
    tokens.push(Spanned {
        span: len..len + 1,
        value: Token::End,
    });
    Ok(tokens)
}

/// Renders tokens the way they were written, separated by spaces.
pub fn show_tokens(tokens: &[Spanned<Token>]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
