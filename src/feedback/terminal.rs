//! Feedback relayed by a person at the terminal

use super::FeedbackSource;
use crate::core::{Pattern, Word};
use crate::error::FeedbackError;
use crate::results::GameRecord;
use std::io::{BufRead, Write};

/// Prompts for the outcome of each guess
///
/// Accepts `22010`, `GY-G-`, the emoji squares, or `win`. Anything else is
/// rejected and asked for again; `quit` or end of input abandons the game.
#[derive(Debug)]
pub struct TerminalFeedback<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFeedback<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, mostly for inspecting what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>, FeedbackError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}

impl<R: BufRead, W: Write> FeedbackSource for TerminalFeedback<R, W> {
    fn open(&mut self) -> Result<(), FeedbackError> {
        writeln!(self.output, "After each guess, enter the feedback pattern:")?;
        writeln!(self.output, "  - Use 2/G/🟩 for green (correct position)")?;
        writeln!(self.output, "  - Use 1/Y/🟨 for yellow (wrong position)")?;
        writeln!(self.output, "  - Use 0/-/⬜ for gray (not in word)")?;
        writeln!(self.output, "  - Or type 'win' if you got it right, 'quit' to stop\n")?;
        Ok(())
    }

    fn submit(&mut self, guess: &Word, attempt: usize) -> Result<Pattern, FeedbackError> {
        writeln!(self.output, "Guess {attempt}: {}", guess.text().to_uppercase())?;

        loop {
            write!(self.output, "Feedback: ")?;
            self.output.flush()?;

            let Some(input) = self.read_line()? else {
                return Err(FeedbackError::Aborted);
            };

            match input.as_str() {
                "quit" | "q" | "exit" => return Err(FeedbackError::Aborted),
                "win" | "correct" | "solved" => return Ok(Pattern::PERFECT),
                _ => {
                    if let Some(pattern) = Pattern::parse(&input) {
                        return Ok(pattern);
                    }
                    writeln!(
                        self.output,
                        "Invalid pattern '{input}'! Use 2/1/0, G/Y/-, 'win', or '🟩🟨⬜🟩🟨'"
                    )?;
                }
            }
        }
    }

    fn finished(&mut self, record: &GameRecord) -> Result<(), FeedbackError> {
        match record.final_guess() {
            Some(word) if record.won() => writeln!(
                self.output,
                "\nSolved: {} in {} {}",
                word.text().to_uppercase(),
                record.tries,
                if record.tries == 1 { "guess" } else { "guesses" }
            )?,
            _ => writeln!(self.output, "\nNot solved after {} guesses", record.tries)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{GameOutcome, Turn};
    use std::io::Cursor;
    use std::time::Duration;

    fn terminal(input: &str) -> TerminalFeedback<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalFeedback::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(source: TerminalFeedback<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(source.into_output()).unwrap()
    }

    #[test]
    fn reads_every_notation() {
        let guess = Word::new("crane").unwrap();
        let mut source = terminal("21001\nGY--G\n🟩🟨⬜⬜🟩\nWIN\n");

        assert_eq!(source.submit(&guess, 1).unwrap().to_string(), "21001");
        assert_eq!(source.submit(&guess, 2).unwrap().to_string(), "21002");
        assert_eq!(source.submit(&guess, 3).unwrap().to_string(), "21002");
        assert!(source.submit(&guess, 4).unwrap().is_perfect());

        let output = printed(source);
        assert!(output.contains("Guess 1: CRANE"));
        assert!(output.contains("Guess 4: CRANE"));
    }

    #[test]
    fn reprompts_on_bad_input() {
        let guess = Word::new("slate").unwrap();
        let mut source = terminal("hello\n2100\n00000\n");

        assert_eq!(source.submit(&guess, 1).unwrap(), Pattern::new(0));

        let output = printed(source);
        assert_eq!(output.matches("Feedback: ").count(), 3);
        assert!(output.contains("Invalid pattern 'hello'"));
    }

    #[test]
    fn quit_and_eof_abort() {
        let guess = Word::new("slate").unwrap();
        assert!(matches!(
            terminal("quit\n").submit(&guess, 1),
            Err(FeedbackError::Aborted)
        ));
        assert!(matches!(
            terminal("").submit(&guess, 1),
            Err(FeedbackError::Aborted)
        ));
    }

    #[test]
    fn finished_reports_outcome() {
        let mut source = terminal("");
        let record = GameRecord {
            outcome: GameOutcome::Won,
            tries: 3,
            elapsed: Duration::from_millis(12),
            turns: vec![Turn {
                guess: Word::new("utter").unwrap(),
                pattern: Pattern::PERFECT,
                remaining: 1,
            }],
        };
        source.finished(&record).unwrap();
        assert!(printed(source).contains("Solved: UTTER in 3 guesses"));
    }
}
