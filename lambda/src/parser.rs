use crate::{
    lexer::{tokenize, Token},
    prelude::*,
    term::{Term, TermRef},
};

/// Recursive-descent parser with a single token of lookahead.
///
/// ```text
/// expr        := LAMBDA VAR* DOT expr | application
/// application := term term*
/// term        := VAR | LPAREN expr RPAREN
/// ```
pub struct Parser<'t> {
    tokens: &'t [Spanned<Token>],
    position: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Spanned<Token>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn current(&self) -> Spanned<Token> {
        self.tokens.get(self.position).cloned().unwrap_or_else(|| {
            let end = self.tokens.last().map_or(0, |t| t.span.end);
            Spanned {
                span: end..end + 1,
                value: Token::End,
            }
        })
    }

    /// Moves to the next token, staying on the last one once reached.
    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn error(&self, kind: SyntaxError) -> Error {
        Error::Syntax {
            kind,
            span: self.current().span(),
        }
    }

    /// Parses a whole expression and requires the input to end right after it.
    pub fn parse(mut self) -> Result<TermRef> {
        let term = self.expression()?;
        if self.current().value != Token::End {
            return Err(self.error(SyntaxError::TrailingInput));
        }
        Ok(term)
    }

    fn expression(&mut self) -> Result<TermRef> {
        if self.current().value != Token::Lambda {
            return self.application();
        }
        self.advance();

        let mut params = vec![];
        while let Token::Var(param) = self.current().value {
            params.push(param);
            self.advance();
        }
        if self.current().value != Token::Dot {
            return Err(self.error(SyntaxError::MissingDot));
        }
        self.advance();

        let body = self.expression()?;
        Ok(params
            .into_iter()
            .rev()
            .fold(body, |body, param| Term::abs(param, body)))
    }

    fn application(&mut self) -> Result<TermRef> {
        let mut term = self.term()?;
        while matches!(self.current().value, Token::Var(_) | Token::LParen) {
            let arg = self.term()?;
            term = Term::apply(term, arg);
        }
        Ok(term)
    }

    fn term(&mut self) -> Result<TermRef> {
        match self.current().value {
            Token::Var(name) => {
                self.advance();
                Ok(Term::var(name))
            }
            Token::LParen => {
                self.advance();
                let term = self.expression()?;
                if self.current().value != Token::RParen {
                    return Err(self.error(SyntaxError::UnclosedParen));
                }
                self.advance();
                Ok(term)
            }
            _ => Err(self.error(SyntaxError::UnexpectedTerm)),
        }
    }
}

pub fn parse_term(source: &str) -> Result<TermRef> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens).parse()
}
