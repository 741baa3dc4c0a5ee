//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Reads operator answers and writes messages.
///
/// End of input is reported as `io::ErrorKind::UnexpectedEof` so callers can
/// tell it apart from an empty answer. Bytes that are not valid UTF-8 are
/// replaced rather than rejected, so stray input never ends a session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print `label` without a newline and read one trimmed answer.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Ask until the answer is yes or no.
    pub fn ask_yes_no(&mut self, label: &str) -> io::Result<bool> {
        loop {
            match self.ask(label)?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("please enter yes or no")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
