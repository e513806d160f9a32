//! Scripted [`Console`] for driving the menu without a terminal.

use std::collections::VecDeque;

use crate::error::Result;
use crate::port::inbound::console::Console;

/// Answers prompts from a fixed queue and records every printed line.
///
/// Once the queue is empty, or after [`Console::close`], prompts return
/// `Ok(None)` just like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    transcript: Vec<String>,
    closed: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line printed so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Every question asked so far, answered or not.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Printed lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Printed lines equal to `line`.
    pub fn lines_equal(&self, line: &str) -> usize {
        self.transcript.iter().filter(|l| l.as_str() == line).count()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.prompts.push(question.to_string());
        if self.closed {
            return Ok(None);
        }
        Ok(self.answers.pop_front())
    }

    fn print(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
