use rustyline::{error::ReadlineError, Editor};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error<E> {
    #[error(transparent)]
    Readline(ReadlineError),
    #[error("Eval failed: {0:?}")]
    EvalError(E),
}

pub trait Repl {
    type Error: std::fmt::Debug;
    const PROMPT: &'static str = ">> ";
    const HISTORY: Option<&'static str> = None;
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error>;
}

/// What to do with a line read from the editor.
#[derive(PartialEq, Eq, Debug)]
enum Action {
    Evaluate(String),
    Skip,
    Quit,
}

/// Two consecutive empty lines end the session; a single one is ignored.
#[derive(Default, Debug)]
struct EmptyLines {
    seen: bool,
}
impl EmptyLines {
    fn feed(&mut self, line: String) -> Action {
        if line.is_empty() {
            if std::mem::replace(&mut self.seen, true) {
                Action::Quit
            } else {
                Action::Skip
            }
        } else {
            self.seen = false;
            Action::Evaluate(line)
        }
    }
}

pub fn start_repl<R: Repl>(mut repl: R) -> Result<(), Error<R::Error>> {
    let mut editor = Editor::<()>::new();
    if let Some(history) = R::HISTORY {
        editor.load_history(history).ok();
    }
    let mut empty_lines = EmptyLines::default();
    loop {
        match editor.readline(R::PROMPT) {
            Ok(line) => match empty_lines.feed(line) {
                Action::Evaluate(input) => {
                    editor.add_history_entry(input.as_str());
                    repl.evaluate(input).map_err(Error::EvalError)?;
                    if let Some(history) = R::HISTORY {
                        editor.save_history(history).map_err(Error::Readline)?;
                    }
                }
                Action::Skip => {}
                Action::Quit => break Ok(()),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break Ok(());
            }
            Err(e) => break Err(Error::Readline(e)),
        }
    }
}
