use std::io::{self, BufRead, Write};

/// Source of player answers. `None` means input is exhausted.
pub trait Prompt {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Prompts on stdout and reads answers line by line from any buffered reader.
pub struct ReaderPrompt<R> {
    reader: R,
}

/// Blocking console prompt.
pub type StdinPrompt = ReaderPrompt<io::StdinLock<'static>>;

impl StdinPrompt {
    pub fn stdin() -> Self {
        ReaderPrompt::new(io::stdin().lock())
    }
}

impl<R: BufRead> ReaderPrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for ReaderPrompt<R> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        // bytes that are not UTF-8 still make a line, which callers reject as an answer
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(&buf).into_owned()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                None
            }
        }
    }
}

/// Replays canned answers in order and records every prompt it was shown.
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|s| s.to_string()).collect(), asked: Vec::new() }
    }

    pub fn remaining(&self) -> usize { self.answers.len() }

    pub fn was_asked(&self, needle: &str) -> bool {
        self.asked.iter().any(|p| p.contains(needle))
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front()
    }
}
