//! User-input port for the interactive questions the pipeline asks.
//!
//! Every prompt goes through the [`UserInput`] trait so the pipeline can be
//! driven by a scripted source in tests instead of a terminal.

use std::collections::VecDeque;
use std::io::{self, Write};

use colored::Colorize;

/// Source of interactive answers for the pipeline.
///
/// Two implementations exist: [`ConsoleInput`] reads from stdin, and
/// [`ScriptedInput`] replays canned answers for non-interactive use.
pub trait UserInput {
    /// Asks a yes/no question and returns the answer.
    fn confirm(&mut self, question: &str) -> bool;

    /// Asks a free-form question and returns the trimmed answer line.
    fn line(&mut self, question: &str) -> String;
}

/// Blocking stdin-backed prompter used by the real CLI.
pub struct ConsoleInput;

impl ConsoleInput {
    fn read_line(question: &str) -> String {
        print!("{} ", question.yellow());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return String::new();
        }
        answer.trim().to_string()
    }
}

impl UserInput for ConsoleInput {
    fn confirm(&mut self, question: &str) -> bool {
        loop {
            let answer = Self::read_line(question).to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("{}", "Please answer with y or n.".yellow()),
            }
        }
    }

    fn line(&mut self, question: &str) -> String {
        Self::read_line(question)
    }
}

/// Replays a fixed sequence of answers; panics when the script runs dry.
pub struct ScriptedInput {
    confirms: VecDeque<bool>,
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(confirms: Vec<bool>, lines: Vec<String>) -> Self {
        Self {
            confirms: confirms.into(),
            lines: lines.into(),
        }
    }
}

impl UserInput for ScriptedInput {
    fn confirm(&mut self, _question: &str) -> bool {
        self.confirms
            .pop_front()
            .expect("scripted input ran out of confirm answers")
    }

    fn line(&mut self, _question: &str) -> String {
        self.lines
            .pop_front()
            .expect("scripted input ran out of line answers")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new(vec![true, false], vec!["abc".to_string()]);
        assert!(input.confirm("first?"));
        assert!(!input.confirm("second?"));
        assert_eq!(input.line("playlist?"), "abc");
    }
}
