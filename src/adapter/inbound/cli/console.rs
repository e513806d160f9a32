//! Console backed by the process's standard streams.

use std::io::{self, BufRead, IsTerminal, StdinLock, Write};

use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::Result;
use crate::port::inbound::console::Console;

enum Source {
    /// A person at a terminal; prompts are rendered by `dialoguer`.
    Interactive(ColorfulTheme),
    /// Piped or redirected input, read one line per prompt.
    Piped(StdinLock<'static>),
}

/// Terminal that interactive prompts are drawn on, the same stream as menu output.
fn prompt_term() -> Term {
    Term::stdout()
}

/// [`Console`] over stdin/stdout.
pub struct TerminalConsole {
    source: Source,
    closed: bool,
}

impl TerminalConsole {
    /// Pick interactive or piped mode from whether stdin is a terminal.
    #[must_use]
    pub fn new() -> Self {
        let stdin = io::stdin();
        let source = if stdin.is_terminal() {
            Source::Interactive(ColorfulTheme::default())
        } else {
            Source::Piped(stdin.lock())
        };
        Self {
            source,
            closed: false,
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }

        match &mut self.source {
            Source::Interactive(theme) => {
                let answer = Input::<String>::with_theme(&*theme)
                    .with_prompt(question)
                    .allow_empty(true)
                    .interact_text_on(&prompt_term());
                match answer {
                    Ok(line) => Ok(Some(line)),
                    Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                        Ok(None)
                    }
                    Err(err) => Err(err.into()),
                }
            }
            Source::Piped(stdin) => {
                let mut stdout = io::stdout().lock();
                write!(stdout, "{question}: ")?;
                stdout.flush()?;

                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    writeln!(stdout)?;
                    return Ok(None);
                }
                Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
            }
        }
    }

    fn print(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
