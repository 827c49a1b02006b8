//! Presentation and input collaborators.
//!
//! The core never talks to a terminal directly: rulers and players are
//! handed narrow trait objects for output (`Presenter`) and answers
//! (`InputSource`). The console implementations live here too, as does the
//! message catalog used by the session layer.
//!
//! Keeping both seams this thin is what lets the integration tests drive
//! whole rounds with a scripted input and inspect every rendered line.

pub mod catalog;

pub use catalog::{MessageCatalog, RenderContext};

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::core::EngineError;

/// Output seam: rulers and players push human-viewable lines through this.
pub trait Presenter {
    /// Show one line of text.
    fn show(&mut self, line: &str);

    /// Clear the display between turns. Optional; defaults to a no-op.
    fn clear(&mut self) {}
}

/// Input seam: interactive players pull validated-later answers from this.
pub trait InputSource {
    /// Prompt and read one answer.
    ///
    /// Format validation happens at the caller (which re-prompts); an error
    /// here means the stream itself is gone.
    fn answer(&mut self, prompt: &str) -> Result<String, EngineError>;
}

/// Terminal-backed presenter and input source.
pub struct Console;

impl Presenter for Console {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear(&mut self) {
        // ANSI clear + cursor home; good enough for the terminals we target.
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().flush();
    }
}

impl InputSource for Console {
    fn answer(&mut self, prompt: &str) -> Result<String, EngineError> {
        print!("{prompt} ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(EngineError::Input(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }
        Ok(line.trim().to_string())
    }
}

/// Presenter that records every line for later inspection.
///
/// Used by the integration tests and handy for embedding the engine in
/// non-terminal frontends.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines shown so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Presenter for Transcript {
    fn show(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Input source that replays a fixed list of answers.
///
/// Exhausting the script is an input failure, mirroring a closed stream.
#[derive(Debug)]
pub struct Script {
    answers: VecDeque<String>,
}

impl Script {
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for Script {
    fn answer(&mut self, _prompt: &str) -> Result<String, EngineError> {
        self.answers.pop_front().ok_or_else(|| {
            EngineError::Input(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.show("first");
        transcript.show("second");

        assert_eq!(transcript.lines(), &["first", "second"]);
        assert!(transcript.contains("sec"));
        assert!(!transcript.contains("third"));
    }

    #[test]
    fn test_script_replays_then_fails() {
        let mut script = Script::new(["5", "s"]);

        assert_eq!(script.answer("tile?").unwrap(), "5");
        assert_eq!(script.answer("hit or stay?").unwrap(), "s");
        assert!(script.answer("again?").is_err());
    }
}
