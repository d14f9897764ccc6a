//! Line-oriented terminal I/O.
//!
//! Scenes talk to a [`Console`]: clear the screen, print a block of lines,
//! then block on exactly one line of input. `read_line` returns `Ok(None)`
//! once input is exhausted so the game can wind down instead of spinning.

use crate::core::constants::{PAUSE_PROMPT, SEPARATOR_LINE};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    fn clear(&mut self) -> io::Result<()>;

    fn print(&mut self, line: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line without its trailing newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn draw_line(&mut self) -> io::Result<()> {
        self.print(SEPARATOR_LINE)
    }

    fn print_all(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.print(line)?;
        }
        Ok(())
    }

    /// "Press enter to continue". Returns false once input is exhausted.
    fn pause(&mut self) -> io::Result<bool> {
        Ok(self.read_line(PAUSE_PROMPT)?.is_some())
    }
}

/// Console backed by the real terminal: stdout plus blocking stdin reads.
///
/// Generic over its streams so the line handling can be exercised in memory.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        self.output
            .execute(Clear(ClearType::All))?
            .execute(MoveTo(0, 0))?;
        Ok(())
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches the scene as unrecognised input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Console fed from a fixed list of inputs, recording everything shown.
///
/// Used to drive whole sessions in tests.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            clears: 0,
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn print(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let input = self.inputs.pop_front();
        if let Some(ref line) = input {
            self.transcript.push(format!("{}{}", prompt, line));
        }
        Ok(input)
    }
}
