use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{anyhow, Result};

use crate::console::Console;
use crate::model::record::EmployeeRecord;
use crate::repository::RecordRepository;

/// Shares its storage between clones so a test can inspect what was saved.
#[derive(Clone, Default)]
pub struct MockRecordRepo {
    records: Rc<RefCell<Vec<EmployeeRecord>>>,
    saves: Rc<RefCell<usize>>,
}

impl MockRecordRepo {
    pub fn with_records(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: Rc::new(RefCell::new(records)),
            saves: Rc::default(),
        }
    }

    pub fn stored(&self) -> Vec<EmployeeRecord> {
        self.records.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl RecordRepository for MockRecordRepo {
    fn load(&self) -> Result<Vec<EmployeeRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[EmployeeRecord]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

pub struct FailingRepo;

impl RecordRepository for FailingRepo {
    fn load(&self) -> Result<Vec<EmployeeRecord>> {
        Err(anyhow!("disk unavailable"))
    }

    fn save(&self, _records: &[EmployeeRecord]) -> Result<()> {
        Err(anyhow!("disk unavailable"))
    }
}

/// Replays queued input lines and records everything written.
#[derive(Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<S: AsRef<str>>(input: &[S]) -> Self {
        Self {
            input: input.iter().map(|s| s.as_ref().to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn printed(&self, text: &str) -> bool {
        self.output.iter().any(|line| line == text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.output.iter().filter(|line| *line == text).count()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn line(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn centered(&mut self, text: &str) -> Result<()> {
        self.line(text)
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        if !prompt.is_empty() {
            self.output.push(prompt.to_string());
        }
        Ok(self.input.pop_front())
    }

    fn centered_prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompt(prompt)
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Input for one employee slot: id, name and five day values.
pub fn slot_input(id: &str, name: &str, hours: [&str; 5]) -> Vec<String> {
    let mut lines = vec![id.to_string(), name.to_string()];
    lines.extend(hours.iter().map(|h| h.to_string()));
    lines
}
