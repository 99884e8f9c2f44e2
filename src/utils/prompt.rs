//! Operator confirmation.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Reads the answer from a line-based input, writing the question to `out`.
///
/// Only `y` or `yes` (any case) count as yes. Empty input and end-of-file are no.
pub struct LineConfirm<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.out, "{question} [y/N] ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(false);
        }
        Ok(is_yes(&line))
    }
}

/// Confirmation on the terminal: question on stderr, answer from stdin.
pub fn stdin_confirm() -> LineConfirm<io::StdinLock<'static>, io::Stderr> {
    LineConfirm::new(io::stdin().lock(), io::stderr())
}

/// Always answers yes (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        crate::debug!("prompt"; "{} [assumed yes]", question);
        Ok(true)
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let answer = LineConfirm::new(input.as_bytes(), &mut out)
            .confirm("Publish?")
            .unwrap();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  yes  \n").0);
    }

    #[test]
    fn test_no_answers() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("yep\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn test_question_is_printed() {
        let (_, out) = ask("n\n");
        assert_eq!(out, "Publish? [y/N] ");
    }

    #[test]
    fn test_assume_yes() {
        assert!(AssumeYes.confirm("Publish?").unwrap());
    }
}
