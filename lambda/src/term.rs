use std::rc::Rc;

use crate::prelude::*;

pub type TermRef = Rc<Term>;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Term {
    /// `x`
    Var(Identifier),
    /// `λx. t`
    Abs(Identifier, TermRef),
    /// `t t`
    Apply(TermRef, TermRef),
}

impl Term {
    pub fn var(name: impl Into<String>) -> TermRef {
        Rc::new(Term::Var(Identifier::new(name.into())))
    }

    pub fn abs(param: impl Into<String>, body: TermRef) -> TermRef {
        Rc::new(Term::Abs(Identifier::new(param.into()), body))
    }

    pub fn apply(func: TermRef, arg: TermRef) -> TermRef {
        Rc::new(Term::Apply(func, arg))
    }
}

/// Fully parenthesized: every application is wrapped, and so is every
/// abstraction standing on either side of one.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct Operand<'a>(&'a Term);
        impl std::fmt::Display for Operand<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.0 {
                    Term::Abs(_, _) => f.write_fmt(format_args!("({})", self.0)),
                    term => std::fmt::Display::fmt(term, f),
                }
            }
        }
        match self {
            Term::Var(name) => f.write_str(name),
            Term::Abs(param, body) => f.write_fmt(format_args!("λ{param}.{body}")),
            Term::Apply(func, arg) => {
                f.write_fmt(format_args!("({} {})", Operand(func), Operand(arg)))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Term::var("x").to_string(), "x");
        assert_eq!(Term::abs("x", Term::var("x")).to_string(), "λx.x");
        assert_eq!(
            Term::apply(Term::apply(Term::var("f"), Term::var("a")), Term::var("b")).to_string(),
            "((f a) b)"
        );
        assert_eq!(
            Term::apply(
                Term::abs("x", Term::apply(Term::var("x"), Term::var("x"))),
                Term::abs("y", Term::var("y"))
            )
            .to_string(),
            "((λx.(x x)) (λy.y))"
        );
        assert_eq!(
            Term::abs("x0", Term::abs("y", Term::var("x0"))).to_string(),
            "λx0.λy.x0"
        );
        assert_eq!(
            Term::apply(Term::var("f"), Term::abs("x", Term::var("x"))).to_string(),
            "(f (λx.x))"
        );
    }
}
