// src/ports/console.rs
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use tracing::warn;

use crate::application::Presenter;
use crate::domain::Rating;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Terminal presenter: colored prompt/answer display and line-based input
/// for the flip acknowledgement and the q/w/e/r rating menu.
///
/// Generic over its streams so the interaction can be exercised against
/// in-memory buffers.
pub struct ConsolePresenter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl ConsolePresenter<BufReader<Stdin>, Stdout> {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl Default for ConsolePresenter<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn print_colored(&mut self, prefix: &str, text: &str, color: &str) {
        let _ = writeln!(self.output, "{color}{prefix}{text}{RESET}");
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        if let Err(e) = self.input.read_line(&mut line) {
            warn!(error = %e, "Failed to read console input");
        }
        line
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn show_prompt(&mut self, text: &str) {
        self.print_colored("Front: ", text, RED);
    }

    fn show_answer(&mut self, text: &str) {
        self.print_colored("Back: ", text, RED);
    }

    fn await_flip(&mut self) {
        let _ = writeln!(self.output, "Press Enter to flip the card...");
        let _ = self.output.flush();
        self.read_line();
    }

    fn await_rating(&mut self) -> Option<Rating> {
        let _ = writeln!(self.output, "\nRate your answer:");
        self.print_colored("q: ", "Repeat", RED);
        self.print_colored("w: ", "Easy      (review in 1 day)", YELLOW);
        self.print_colored("e: ", "Very Easy (review in 2 days)", BLUE);
        self.print_colored("r: ", "Fluent    (review in 3 days)", GREEN);
        let _ = self.output.flush();

        let line = self.read_line();
        line.trim().chars().next().and_then(Rating::from_key)
    }
}
