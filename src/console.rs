//! Line-oriented terminal I/O. Every menu and operation talks to the user
//! through a `Console`, so tests can script input with a `Cursor`.

use std::io::{self, BufRead, Write};

use crate::error::{NoteError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its terminator. Whitespace is preserved;
    /// bytes that are not valid UTF-8 become U+FFFD.
    pub fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(NoteError::InputClosed);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Collect lines until the first empty one. Each kept line is stored
    /// with a trailing newline; the empty terminator is dropped.
    pub fn read_body(&mut self) -> Result<String> {
        let mut body = String::new();
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                return Ok(body);
            }
            body.push_str(&line);
            body.push('\n');
        }
    }

    /// Ask a yes/no question. Only `y` (any case, surrounding spaces
    /// ignored) counts as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.say(question)?;
        let answer = self.read_line()?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write without a newline and flush, leaving the cursor after the text.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
