//! The interactive prompt loop.
//!
//! Reads one line at a time, runs it as a [`Command`], and reports failures
//! without stopping: a grammar or validation error only costs the line it
//! was found on. The loop ends at end of input, on `:quit:`, or when the
//! input or output stream fails.

use crate::command::Command;
use crate::error::Result;
use crate::session::Session;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Prompt settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Text written before reading each line (may be empty)
    pub prompt: String,
    /// Hit limit for searches that do not give their own
    pub default_limit: Option<usize>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            prompt: "> ".to_string(),
            default_limit: None,
        }
    }
}

/// Summary of a finished prompt run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptStats {
    /// Commands that ran successfully
    pub executed: usize,
    /// Lines rejected with an error
    pub rejected: usize,
}

/// Run a single line against a session.
///
/// Returns `true` if a command ran; blank lines do nothing.
///
/// # Errors
///
/// Returns whatever parsing or executing the line returns.
pub fn run_line<W: Write>(line: &str, session: &mut Session<W>) -> Result<bool> {
    match Command::parse(line)? {
        Some(command) => {
            command.execute(session)?;
            Ok(true)
        },
        None => Ok(false),
    }
}

/// Read and run lines until end of input or `:quit:`.
///
/// Recoverable errors are written to the session output as
/// `error: <message>` and the loop continues with the next line.
///
/// # Errors
///
/// Returns [`CatalogError::Io`](crate::error::CatalogError::Io) if reading
/// input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    input: R,
    session: &mut Session<W>,
    config: &PromptConfig,
) -> Result<PromptStats> {
    session.set_default_limit(config.default_limit);
    let mut stats = PromptStats::default();
    let mut lines = input.lines();

    while session.is_running() {
        write!(session.output(), "{}", config.prompt)?;
        session.output().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match run_line(&line, session) {
            Ok(true) => stats.executed += 1,
            Ok(false) => {},
            Err(err) if err.is_recoverable() => {
                warn!(line = line.as_str(), error = %err, "rejected input line");
                stats.rejected += 1;
                writeln!(session.output(), "error: {err}")?;
            },
            Err(err) => return Err(err),
        }
    }

    debug!(executed = stats.executed, rejected = stats.rejected, "prompt finished");
    Ok(stats)
}

/// Like [`run`], but an input line that fails is returned as an error.
///
/// Useful for scripted input where the first bad line should stop the run.
///
/// # Errors
///
/// Returns the first error from any line, or from the streams.
pub fn run_strict<R: BufRead, W: Write>(input: R, session: &mut Session<W>) -> Result<usize> {
    let mut executed = 0;
    for line in input.lines() {
        if !session.is_running() {
            break;
        }
        let line = line?;
        if run_line(&line, session)? {
            executed += 1;
        }
    }
    Ok(executed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::io::Cursor;

    fn quiet() -> PromptConfig {
        PromptConfig {
            prompt: String::new(),
            default_limit: None,
        }
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let input = Cursor::new(
            "dune\n\
             :add: :id: 1 :title: Dune :author: Frank Herbert :publisher: Chilton :date: 1965\n\
             :isbn: 123\n\
             \n\
             :title: dune\n",
        );
        let mut session = Session::new(Vec::new());
        let stats = run(input, &mut session, &quiet()).unwrap();

        assert_eq!(stats, PromptStats { executed: 2, rejected: 2 });
        let text = String::from_utf8(session.into_output()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].starts_with("error: Grammar error"));
        assert!(lines[1].starts_with("added: 1\tDune"));
        assert_eq!(lines[2], "error: Unknown tag: `:isbn:`");
        assert!(lines[3].starts_with("[1] 1\tDune"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let input = Cursor::new(":quit:\n:help:\n");
        let mut session = Session::new(Vec::new());
        let stats = run(input, &mut session, &quiet()).unwrap();
        assert_eq!(stats.executed, 1);
        assert!(session.into_output().is_empty());
    }

    #[test]
    fn test_prompt_text_is_written() {
        let input = Cursor::new(":list:\n");
        let mut session = Session::new(Vec::new());
        run(input, &mut session, &PromptConfig::default()).unwrap();
        let text = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(text, "> catalog is empty\n> ");
    }

    #[test]
    fn test_run_strict_stops_at_first_error() {
        let input = Cursor::new(":list:\n:list: all\n:help:\n");
        let mut session = Session::new(Vec::new());
        let err = run_strict(input, &mut session).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
