use anyhow::Result;
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use lambda::{
    lexer, parser,
    prelude::*,
    reduce::{self, Stdout},
    session::{preprocess, Session},
};
use util::repl;

fn build_report(e: &Error) -> Report<Span> {
    let label = match e {
        Error::Lex { found: Some(c), .. } => format!("Unexpected {}", c.fg(Color::Red)),
        Error::Lex { found: None, .. } => "Unexpected end of the input".to_string(),
        Error::Syntax { kind, .. } => format!("{}", kind.fg(Color::Red)),
    };
    Report::build(ReportKind::Error, (), e.span().start)
        .with_message(e)
        .with_label(Label::new(e.span()).with_message(label).with_color(Color::Red))
        .finish()
}

/// Splits `:cmd rest` into the command and its argument; plain input is an
/// empty command.
fn split_command(input: &str) -> (&str, &str) {
    match input.strip_prefix(':') {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped.split_once(' ').unwrap_or((stripped, ""))
        }
        None => ("", input),
    }
}

type CommandResult = std::result::Result<(), Error>;

#[derive(Default)]
struct Repl {
    session: Session,
}
impl Repl {
    fn tokenize(input: &str) -> CommandResult {
        let tokens = lexer::tokenize(input)?;
        println!("{}", lexer::show_tokens(&tokens));
        Ok(())
    }

    fn parse(input: &str) -> CommandResult {
        let term = parser::parse_term(input)?;
        println!("{term}");
        Ok(())
    }

    fn step(input: &str) -> CommandResult {
        let term = parser::parse_term(input)?;
        if reduce::is_reduced(&term) {
            println!("{term} is in normal form");
        } else {
            println!("{}", reduce::beta_reduce_step(&term, &mut Stdout));
        }
        Ok(())
    }

    fn interpret(&mut self, input: &str) {
        println!(" - {input} - ");
        println!("{}", self.session.interpret(input, &mut Stdout));
        println!();
    }

    fn show_bindings(&self) {
        for binding in self.session.bindings() {
            println!("{} ={}", binding.name, binding.source);
        }
    }

    fn show_help() {
        println!(
            "{}",
            r#"
term                -- same as :eval term
let name = term     -- evaluate term and label the result with name
:tokenize   term    -- show tokenized term
:parse      term    -- show parsed term
:step       term    -- show the term after one reduction step
:eval       term    -- reduce term to its normal form, tracing each step
:bindings           -- list the bindings made so far
:help               -- show this message
(\ is read as λ, two empty lines quit)
        "#
            .trim()
        );
    }

    fn handle_repl_input(&mut self, input: &str) -> CommandResult {
        let (cmd, input) = split_command(input);
        match cmd {
            "to" | "tokenize" => {
                Self::tokenize(input)?;
            }
            "p" | "parse" => {
                Self::parse(input)?;
            }
            "s" | "step" => {
                Self::step(input)?;
            }
            "" | "e" | "eval" | "evaluate" => {
                self.interpret(input);
            }
            "b" | "bindings" => {
                self.show_bindings();
            }
            "h" | "he" | "hel" | "help" => {
                Self::show_help();
            }
            _ => {
                eprintln!("Unknown command {cmd}");
                Self::show_help();
            }
        }
        Ok(())
    }
}
impl repl::Repl for Repl {
    type Error = anyhow::Error;
    const PROMPT: &'static str = "λ> ";
    const HISTORY: Option<&'static str> = Some("/tmp/lambda.history");
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error> {
        let input = preprocess(&input);
        if let Err(e) = self.handle_repl_input(&input) {
            build_report(&e).eprint(Source::from(&input))?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("Hi, this is an untyped lambda calculus REPL. :h to show help");
    println!();
    repl::start_repl(Repl::default())?;
    Ok(())
}
