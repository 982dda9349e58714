//! The interactive layer around [`evaluate_with`]: input preprocessing,
//! `let` bindings and result labelling.

use rpds::Vector;

use crate::{evaluate_with, reduce::Trace};

/// Lets `\` stand in for `λ` on keyboards without the glyph.
pub fn preprocess(line: &str) -> String {
    line.replace('\\', "λ")
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Binding {
    pub name: String,
    pub source: String,
}

#[derive(PartialEq, Eq, Debug)]
pub enum Input<'a> {
    Expression(&'a str),
    Binding { name: String, source: &'a str },
    InvalidBinding,
}

impl<'a> Input<'a> {
    /// `let <name> = <expr>` is a binding, anything else an expression.
    pub fn classify(input: &'a str) -> Self {
        let input = input.trim_start_matches(' ');
        let Some(rest) = input.strip_prefix("let ") else {
            return Input::Expression(input);
        };
        match rest.split_once('=') {
            Some((name, source)) => Input::Binding {
                name: name.trim().replace(' ', "-"),
                source,
            },
            None => Input::InvalidBinding,
        }
    }
}

/// Bindings made so far, in definition order. They only label output; the
/// evaluator never looks them up.
#[derive(Default, Debug)]
pub struct Session {
    bindings: Vector<Binding>,
}

impl Session {
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn interpret(&mut self, input: &str, trace: &mut impl Trace) -> String {
        match Input::classify(input) {
            Input::Expression(source) => evaluate_with(source, trace).text,
            Input::Binding { name, source } => {
                let evaluation = evaluate_with(source, trace);
                if !evaluation.success {
                    return evaluation.text;
                }
                let labelled = format!("<{name}> {}", evaluation.text);
                self.bindings.push_back_mut(Binding {
                    name,
                    source: source.to_string(),
                });
                labelled
            }
            Input::InvalidBinding => "Invalid Syntax".to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn interpret(session: &mut Session, input: &str) -> String {
        session.interpret(&preprocess(input), &mut Vec::<String>::new())
    }

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess(r"\x.\y.x"), "λx.λy.x");
        assert_eq!(preprocess("x y"), "x y");
    }

    #[test]
    fn test_classify() {
        assert_eq!(Input::classify("  (λx.x) y"), Input::Expression("(λx.x) y"));
        assert_eq!(Input::classify("letx"), Input::Expression("letx"));
        assert_eq!(
            Input::classify("let id = λx.x"),
            Input::Binding {
                name: "id".to_string(),
                source: " λx.x"
            }
        );
        assert_eq!(
            Input::classify(" let church two = λf x.f (f x)"),
            Input::Binding {
                name: "church-two".to_string(),
                source: " λf x.f (f x)"
            }
        );
        assert_eq!(Input::classify("let id λx.x"), Input::InvalidBinding);
    }

    #[test]
    fn test_interpret() {
        let mut session = Session::default();
        assert_eq!(interpret(&mut session, r"(\x.x) y"), "y");
        assert_eq!(interpret(&mut session, r"let K = \x y.x"), "<K> λx.λy.x");
        assert_eq!(interpret(&mut session, r"let I = (\x.x) (\x.x)"), "<I> λx.x");
        assert_eq!(
            session.bindings().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            vec!["K", "I"]
        );
        assert_eq!(
            session.bindings().next().map(|b| b.source.as_str()),
            Some(" λx y.x")
        );
    }

    #[test]
    fn test_failed_binding_is_dropped() {
        let mut session = Session::default();
        assert_eq!(
            interpret(&mut session, r"let broken = (\x.x"),
            "Error: Expected closing parenthesis"
        );
        assert_eq!(interpret(&mut session, "let nothing"), "Invalid Syntax");
        assert_eq!(session.bindings().count(), 0);
    }
}
