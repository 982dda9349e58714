use crate::{
    prelude::*,
    term::{Term, TermRef},
};

/// Whether `name` appears anywhere in `term`, binders included.
///
/// Bound occurrences count too, so callers may rename more than strictly
/// necessary but never less.
pub fn occurs_in(name: &str, term: &Term) -> bool {
    match term {
        Term::Var(var) => var.as_str() == name,
        Term::Abs(param, body) => param.as_str() == name || occurs_in(name, body),
        Term::Apply(func, arg) => occurs_in(name, func) || occurs_in(name, arg),
    }
}

/// Returns `base` if it occurs in none of `context`, otherwise the first of
/// `base0`, `base1`, ... that doesn't.
pub fn fresh_name(base: &str, context: &[&Term]) -> Identifier {
    let taken = |name: &str| context.iter().any(|term| occurs_in(name, term));
    if !taken(base) {
        return Identifier::new(base.to_string());
    }
    let name = (0usize..)
        .map(|i| format!("{base}{i}"))
        .find(|name| !taken(name))
        .unwrap_or_default();
    Identifier::new(name)
}

/// Renames every variable and binder called `old` to `new`.
pub fn alpha_convert(term: &TermRef, old: &str, new: &Identifier) -> TermRef {
    match term.as_ref() {
        Term::Var(name) if name.as_str() == old => Term::Var(new.clone()).into(),
        Term::Var(_) => term.clone(),
        Term::Abs(param, body) => {
            let param = if param.as_str() == old {
                new.clone()
            } else {
                param.clone()
            };
            Term::Abs(param, alpha_convert(body, old, new)).into()
        }
        Term::Apply(func, arg) => {
            Term::Apply(alpha_convert(func, old, new), alpha_convert(arg, old, new)).into()
        }
    }
}

/// Replaces the free occurrences of `name` in `term` with `value`, renaming
/// binders of `term` that would capture a variable of `value`.
pub fn substitute(term: &TermRef, name: &str, value: &TermRef) -> TermRef {
    match term.as_ref() {
        Term::Var(var) if var.as_str() == name => value.clone(),
        Term::Var(_) => term.clone(),
        Term::Abs(param, _) if param.as_str() == name => term.clone(),
        Term::Abs(param, body) if occurs_in(param, value) => {
            let substituted = Term::Var(Identifier::new(name.to_string()));
            let fresh = fresh_name(param, &[value.as_ref(), body.as_ref(), &substituted]);
            let body = alpha_convert(body, param, &fresh);
            Term::Abs(fresh, substitute(&body, name, value)).into()
        }
        Term::Abs(param, body) => Term::Abs(param.clone(), substitute(body, name, value)).into(),
        Term::Apply(func, arg) => Term::Apply(
            substitute(func, name, value),
            substitute(arg, name, value),
        )
        .into(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::parse_term;

    fn parse(s: &str) -> TermRef {
        parse_term(s).unwrap()
    }

    #[test]
    fn test_occurs_in() {
        assert!(occurs_in("x", &parse("x")));
        assert!(!occurs_in("y", &parse("x")));
        assert!(occurs_in("x", &parse("λx.y")));
        assert!(occurs_in("y", &parse("λx.y")));
        assert!(occurs_in("b", &parse("(a b) c")));
        assert!(!occurs_in("d", &parse("λa.(a b) c")));
    }

    #[test]
    fn test_fresh_name() {
        assert_eq!(fresh_name("x", &[&parse("y")]).as_str(), "x");
        assert_eq!(fresh_name("x", &[&parse("x")]).as_str(), "x0");
        let renamed = Term::abs("x0", Term::var("x1"));
        assert_eq!(fresh_name("x", &[&parse("x"), &renamed]).as_str(), "x2");
    }

    #[test]
    fn test_alpha_convert() {
        let renamed = alpha_convert(&parse("λx.x y"), "x", &Identifier::new("z".into()));
        assert_eq!(renamed.to_string(), "λz.(z y)");
        let untouched = parse("λy.y");
        assert_eq!(
            alpha_convert(&untouched, "x", &Identifier::new("z".into())),
            untouched
        );
    }

    #[test]
    fn test_substitute_variable() {
        assert_eq!(substitute(&parse("x"), "x", &parse("y")), parse("y"));
        assert_eq!(substitute(&parse("z"), "x", &parse("y")), parse("z"));
        assert_eq!(
            substitute(&parse("x (λy.x)"), "x", &parse("a b")).to_string(),
            "((a b) (λy.(a b)))"
        );
    }

    #[test]
    fn test_shadowed_binder() {
        let term = parse("λx.x");
        assert_eq!(substitute(&term, "x", &parse("λz.z")), term);
        assert_eq!(substitute(&term, "x", &parse("x")), term);
    }

    #[test]
    fn test_capture_avoidance() {
        let substituted = substitute(&parse("λx.y"), "y", &parse("x"));
        assert_eq!(substituted, Term::abs("x0", Term::var("x")));
        assert_eq!(substituted.to_string(), "λx0.x");

        let substituted = substitute(&parse("λx.λy.x y z"), "z", &parse("x y"));
        assert_eq!(substituted.to_string(), "λx0.λy0.((x0 y0) (x y))");
    }

    #[test]
    fn test_renaming_avoids_earlier_renames() {
        // λx.x0 y with y := x must not capture the free x0.
        let term = Term::abs("x", Term::apply(Term::var("x0"), Term::var("y")));
        let substituted = substitute(&term, "y", &parse("x"));
        assert_eq!(substituted.to_string(), "λx1.(x0 x)");
    }

    #[test]
    fn test_unchanged_subtrees_are_shared() {
        let term = parse("a y");
        let substituted = substitute(&term, "y", &parse("c"));
        match (term.as_ref(), substituted.as_ref()) {
            (Term::Apply(before, _), Term::Apply(after, arg)) => {
                assert!(std::rc::Rc::ptr_eq(before, after));
                assert_eq!(arg, &parse("c"));
            }
            _ => panic!("expected an application, got {substituted}"),
        }
    }
}
