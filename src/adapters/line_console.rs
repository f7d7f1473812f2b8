use std::io::{self, BufRead, ErrorKind, Write};

use crate::domain::AppError;
use crate::ports::Console;

/// Console reading answers line by line from any reader.
///
/// Used for piped stdin; end of input counts as an interrupt.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(err) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(format!("Failed to read answer: {}", err))),
        }
    }

    fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}
