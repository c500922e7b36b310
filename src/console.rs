//! Line-oriented console IO.
//!
//! Everything the game shows or asks goes through [`Console`], so a match can
//! be driven from stdin/stdout or from an in-memory script in tests.

use std::io::{self, BufRead, Write};

use crate::error::GameError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` without a newline and read one line back, trailing
    /// newline stripped. End of input is [`GameError::InputClosed`].
    pub fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), GameError> {
        writeln!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write preformatted text as-is.
    pub fn show(&mut self, text: impl AsRef<str>) -> Result<(), GameError> {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
