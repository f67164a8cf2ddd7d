use anyhow::Result;

/// Line-oriented terminal the interactive flows talk through.
pub trait Console {
    fn line(&mut self, text: &str) -> Result<()>;

    /// Writes `text` padded to the middle of the terminal.
    fn centered(&mut self, text: &str) -> Result<()>;

    /// Shows `prompt` and reads one line without its terminator.
    /// Returns `None` once input is closed.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    fn centered_prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    fn clear(&mut self) -> Result<()>;

    fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    fn wait_for_enter(&mut self) -> Result<()> {
        self.prompt("")?;
        Ok(())
    }
}
