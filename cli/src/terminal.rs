use std::io::{self, BufRead, Stdin, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};
use unicode_width::UnicodeWidthStr;
use wfh_core::Console;

/// [Console] over the process stdin/stdout.
pub struct TerminalConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.stdin.lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn terminal_width() -> Option<usize> {
    terminal::size().ok().map(|(cols, _)| cols as usize)
}

/// Left padding that centres `text` in `width` columns. No width, no padding.
pub fn centered_padding(width: Option<usize>, text: &str) -> usize {
    width
        .map(|width| width.saturating_sub(text.width()) / 2)
        .unwrap_or(0)
}

impl Console for TerminalConsole {
    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.stdout, "{}", text)?;
        Ok(())
    }

    fn centered(&mut self, text: &str) -> Result<()> {
        let pad = centered_padding(terminal_width(), text);
        writeln!(self.stdout, "{:pad$}{}", "", text, pad = pad)?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.stdout, "{}", prompt)?;
        self.stdout.flush()?;
        self.read_line()
    }

    fn centered_prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        let pad = centered_padding(terminal_width(), prompt);
        write!(self.stdout, "{:pad$}{}", "", prompt, pad = pad)?;
        self.stdout.flush()?;
        self.read_line()
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_padding() {
        assert_eq!(centered_padding(Some(80), "Work From Home Tracker"), 29);
        assert_eq!(centered_padding(Some(11), "abc"), 4);
    }

    #[test]
    fn test_centered_padding_never_negative() {
        assert_eq!(centered_padding(Some(5), "longer than the terminal"), 0);
    }

    #[test]
    fn test_centered_padding_without_terminal() {
        assert_eq!(centered_padding(None, "~~Diamond Realty~~"), 0);
    }

    #[test]
    fn test_centered_padding_uses_display_width() {
        // Two double-width characters take four columns
        assert_eq!(centered_padding(Some(10), "日本"), 3);
    }
}
