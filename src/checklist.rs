use crate::calculator::Step;
use serde::Serialize;

/// Plain numbered text, one step per line: `"1. knit 2, add 1"`.
pub fn export_numbered(steps: &[Step]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The whole pattern on one line, steps separated by commas.
pub fn inline_pattern(steps: &[Step]) -> String {
    steps
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub step: Step,
    pub done: bool,
}

/// Progress through a pattern. Every operation returns a fresh state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn new(steps: &[Step]) -> Self {
        Self {
            items: steps
                .iter()
                .cloned()
                .map(|step| ChecklistItem { step, done: false })
                .collect(),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// (done, total)
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.done).count();
        (done, self.items.len())
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.done)
    }

    /// 1-indexed number of the first unchecked step.
    pub fn next_pending(&self) -> Option<usize> {
        self.items.iter().position(|i| !i.done).map(|i| i + 1)
    }

    /// Flips step `number` (1-indexed). `None` when out of range.
    pub fn toggle(&self, number: usize) -> Option<Self> {
        if number == 0 || number > self.items.len() {
            return None;
        }
        let mut next = self.clone();
        let item = &mut next.items[number - 1];
        item.done = !item.done;
        Some(next)
    }

    pub fn check_next(&self) -> Option<Self> {
        self.next_pending().and_then(|n| self.toggle(n))
    }

    pub fn reset(&self) -> Self {
        Self::new(&self.steps())
    }

    pub fn steps(&self) -> Vec<Step> {
        self.items.iter().map(|i| i.step.clone()).collect()
    }

    pub fn export(&self) -> String {
        export_numbered(&self.steps())
    }

    /// Applies one parsed command, returning the new state and what to tell the user.
    pub fn apply(&self, command: ChecklistCommand) -> (Self, Outcome) {
        match command {
            ChecklistCommand::Toggle(n) => match self.toggle(n) {
                Some(next) => (next, Outcome::Updated),
                None => (
                    self.clone(),
                    Outcome::Invalid(format!(
                        "No step {} (pattern has {} steps).",
                        n,
                        self.items.len()
                    )),
                ),
            },
            ChecklistCommand::Next => match self.check_next() {
                Some(next) => (next, Outcome::Updated),
                None => (
                    self.clone(),
                    Outcome::Invalid("All steps are already checked.".to_string()),
                ),
            },
            ChecklistCommand::Reset => (self.reset(), Outcome::Updated),
            ChecklistCommand::Export => (self.clone(), Outcome::Export(self.export())),
            ChecklistCommand::Help => (self.clone(), Outcome::Help),
            ChecklistCommand::Quit => (self.clone(), Outcome::Quit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistCommand {
    Toggle(usize),
    Next,
    Reset,
    Export,
    Help,
    Quit,
}

impl ChecklistCommand {
    /// Reads one line of interactive input. Unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_lowercase();
        if let Ok(n) = word.parse::<usize>() {
            return Some(Self::Toggle(n));
        }
        match word.as_str() {
            "n" | "next" | "" => Some(Self::Next),
            "r" | "reset" => Some(Self::Reset),
            "e" | "export" | "copy" => Some(Self::Export),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Export(String),
    Help,
    Quit,
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  <n>        toggle step n
  n, next    check the next unchecked step (also: empty line)
  r, reset   uncheck every step
  e, export  print the numbered pattern
  h, help    show this help
  q, quit    leave the checklist";
