//! Interactive calculation session.
//!
//! Each line is either a session command (`help`, `list`, `history`, `exit`)
//! or exactly `<type> <a> <b>`. Errors are printed and the session continues.

use crate::config::OutputFormat;
use crate::render::render;
use std::io::{self, BufRead, Write};
use tally_prelude::{CalculationError, CalculationFactory, CalculationRecord};
use thiserror::Error;
use tracing::{debug, info};

const PROMPT: &str = "tally> ";

#[derive(Error, Debug)]
pub enum LineError {
    #[error("expected '<type> <a> <b>', got {0} token(s)")]
    Arity(usize),

    #[error("operand '{0}' is not a number")]
    Operand(String),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("failed to render result: {0}")]
    Render(String),

    #[error("input line is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// What the loop should do after a line has been handled
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Continue(String),
    Exit,
}

pub struct Session<'a> {
    factory: &'a CalculationFactory,
    format: OutputFormat,
    history: Vec<CalculationRecord>,
}

impl<'a> Session<'a> {
    pub fn new(factory: &'a CalculationFactory, format: OutputFormat) -> Self {
        Self { factory, format, history: Vec::new() }
    }

    pub fn history(&self) -> &[CalculationRecord] {
        &self.history
    }

    /// Runs the loop until `exit`, `quit` or end of input.
    ///
    /// Only I/O failures end the loop early; a line that is not valid UTF-8 is
    /// reported like any other bad input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        info!("interactive session started");
        writeln!(output, "Tally interactive session. Type 'help' for commands, 'exit' to quit.")?;

        let mut buffer = Vec::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let outcome = match std::str::from_utf8(&buffer) {
                Ok(line) => self.handle_line(line),
                Err(e) => reject(LineError::from(e)),
            };
            match outcome {
                Outcome::Continue(text) if text.is_empty() => {}
                Outcome::Continue(text) => writeln!(output, "{text}")?,
                Outcome::Exit => break,
            }
        }

        writeln!(output, "Goodbye!")?;
        info!(calculations = self.history.len(), "interactive session ended");
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match line.trim() {
            "" => Outcome::Continue(String::new()),
            "exit" | "quit" => Outcome::Exit,
            "help" => Outcome::Continue(self.help()),
            "list" => Outcome::Continue(self.factory.identifiers().join("\n")),
            "history" => Outcome::Continue(self.render_history()),
            command => match self.calculate(command) {
                Ok(text) => Outcome::Continue(text),
                Err(e) => reject(e),
            },
        }
    }

    fn calculate(&mut self, command: &str) -> Result<String, LineError> {
        let tokens: Vec<&str> = command.split_whitespace().collect();
        let [identifier, a, b] = tokens.as_slice() else {
            return Err(LineError::Arity(tokens.len()));
        };

        let a = parse_operand(a)?;
        let b = parse_operand(b)?;
        let calculation = self.factory.create(identifier, a, b)?;
        let record = calculation.record()?;
        let text = render(&calculation, self.format).map_err(|e| LineError::Render(e.to_string()))?;
        self.history.push(record);
        Ok(text)
    }

    fn help(&self) -> String {
        format!(
            "Usage: <type> <a> <b>   e.g. 'add 2 3'\n\
             Types: {}\n\
             Commands:\n  \
             help      Show this message\n  \
             list      List calculation types\n  \
             history   Show calculations from this session\n  \
             exit      Leave the session",
            self.factory.identifiers().join(", ")
        )
    }

    fn render_history(&self) -> String {
        if self.history.is_empty() {
            return "No calculations yet.".to_string();
        }
        self.history
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {} {}", i + 1, record.kind, record))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn reject(error: LineError) -> Outcome {
    debug!(error = %error, "rejected input line");
    Outcome::Continue(format!("Error: {error}"))
}

fn parse_operand(token: &str) -> Result<f64, LineError> {
    token.parse().map_err(|_| LineError::Operand(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory() -> &'static CalculationFactory {
        CalculationFactory::global().unwrap()
    }

    #[test]
    fn test_calculation_line() {
        let mut session = Session::new(factory(), OutputFormat::Text);
        assert_eq!(
            session.handle_line("add 2 3"),
            Outcome::Continue("Add: 2.0 + 3.0 = 5.0".to_string())
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].result, 5.0);
    }

    #[test]
    fn test_json_output() {
        let mut session = Session::new(factory(), OutputFormat::Json);
        let Outcome::Continue(text) = session.handle_line("Divide 9 3") else {
            panic!("Expected output");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "divide");
        assert_eq!(value["result"], 3.0);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut session = Session::new(factory(), OutputFormat::Text);
        let cases = [
            ("add 1", "Error: expected '<type> <a> <b>', got 2 token(s)"),
            ("add one 2", "Error: operand 'one' is not a number"),
            ("divide 1 0", "Error: division by zero is not allowed"),
        ];
        for (line, expected) in cases {
            assert_eq!(session.handle_line(line), Outcome::Continue(expected.to_string()));
        }

        let Outcome::Continue(text) = session.handle_line("modulo 1 2") else {
            panic!("Expected output");
        };
        assert!(text.contains("unsupported calculation type 'modulo'"));
        assert!(text.contains("add, divide, multiply, subtract"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_session_commands() {
        let mut session = Session::new(factory(), OutputFormat::Text);
        assert_eq!(session.handle_line("  "), Outcome::Continue(String::new()));
        assert_eq!(
            session.handle_line("list"),
            Outcome::Continue("add\ndivide\nmultiply\nsubtract".to_string())
        );
        assert_eq!(session.handle_line("history"), Outcome::Continue("No calculations yet.".to_string()));

        session.handle_line("multiply 4 2.5");
        session.handle_line("subtract -1 1");
        assert_eq!(
            session.handle_line("history"),
            Outcome::Continue("1. multiply 4.0 * 2.5 = 10.0\n2. subtract -1.0 - 1.0 = -2.0".to_string())
        );
        assert_eq!(session.handle_line("quit"), Outcome::Exit);
    }

    #[test]
    fn test_run_until_exit() {
        let input = b"add 2 3\nbogus\nexit\nadd 5 5\n";
        let mut output = Vec::new();
        let mut session = Session::new(factory(), OutputFormat::Text);
        session.run(&input[..], &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Add: 2.0 + 3.0 = 5.0"));
        assert!(output.contains("Error: expected '<type> <a> <b>', got 1 token(s)"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let input = b"add 2 3\n\xff\xfe 1 2\nadd 4 4\nexit\n";
        let mut output = Vec::new();
        let mut session = Session::new(factory(), OutputFormat::Text);
        session.run(&input[..], &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Error: input line is not valid UTF-8"));
        assert!(output.contains("Add: 4.0 + 4.0 = 8.0"));
        assert!(output.ends_with("Goodbye!\n"));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_json_output_keeps_overflow() {
        let mut session = Session::new(factory(), OutputFormat::Json);
        let Outcome::Continue(text) = session.handle_line("multiply 1e308 10") else {
            panic!("Expected output");
        };
        let record: CalculationRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(record.result, f64::INFINITY);
        assert_eq!(session.history()[0], record);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut output = Vec::new();
        let mut session = Session::new(factory(), OutputFormat::Text);
        session.run(&b"multiply 3 3"[..], &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Multiply: 3.0 * 3.0 = 9.0"));
        assert_eq!(session.history().len(), 1);
    }
}
