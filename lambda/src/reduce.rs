use crate::{
    substitute::substitute,
    term::{Term, TermRef},
};

/// Receives the reduction trace as it happens.
pub trait Trace {
    /// A redex binding `param` was contracted with the (unreduced) `arg`.
    fn contracted(&mut self, param: &str, arg: &Term);
    /// The term reached its normal form.
    fn finished(&mut self);
}

fn contraction_line(param: &str, arg: &Term) -> String {
    format!("↪ β-reduce: {param} <- {arg}")
}

const FINISHED: &str = "done.";

/// Prints the trace to standard output.
pub struct Stdout;

impl Trace for Stdout {
    fn contracted(&mut self, param: &str, arg: &Term) {
        println!("{}", contraction_line(param, arg));
    }
    fn finished(&mut self) {
        println!("{FINISHED}");
    }
}

/// Collects the trace lines.
impl Trace for Vec<String> {
    fn contracted(&mut self, param: &str, arg: &Term) {
        self.push(contraction_line(param, arg));
    }
    fn finished(&mut self) {
        self.push(FINISHED.to_string());
    }
}

pub fn is_redex(term: &Term) -> bool {
    matches!(term, Term::Apply(func, _) if matches!(func.as_ref(), Term::Abs(_, _)))
}

/// Whether `term` contains no redex.
pub fn is_reduced(term: &Term) -> bool {
    match term {
        Term::Var(_) => true,
        Term::Abs(_, body) => is_reduced(body),
        Term::Apply(func, arg) => {
            !matches!(func.as_ref(), Term::Abs(_, _)) && is_reduced(func) && is_reduced(arg)
        }
    }
}

/// Contracts the head redex if there is one, otherwise steps into the
/// function and the argument independently.
pub fn beta_reduce_step(term: &TermRef, trace: &mut impl Trace) -> TermRef {
    match term.as_ref() {
        Term::Var(_) => term.clone(),
        Term::Abs(param, body) => Term::Abs(param.clone(), beta_reduce_step(body, trace)).into(),
        Term::Apply(func, arg) => match func.as_ref() {
            Term::Abs(param, body) => {
                trace.contracted(param, arg);
                substitute(body, param, arg)
            }
            _ => Term::Apply(beta_reduce_step(func, trace), beta_reduce_step(arg, trace)).into(),
        },
    }
}

/// Reduces `term` to its normal form.
///
/// There is no step limit: a term without a normal form keeps this looping.
pub fn beta_reduce(mut term: TermRef, trace: &mut impl Trace) -> TermRef {
    while !is_reduced(&term) {
        term = beta_reduce_step(&term, trace);
    }
    trace.finished();
    term
}
