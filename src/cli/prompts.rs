use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::{output, CliError};

/// Outcome of a menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(usize),
    /// The answer did not name any of the offered items.
    Invalid,
    /// Input ended or the user backed out of the menu.
    Closed,
}

/// Source of user answers for the menu loop.
pub trait Prompter {
    fn select(&mut self, title: &str, items: &[&str]) -> Result<Selection, CliError>;

    /// Reads one line of free text. `None` means input has ended.
    fn input(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Arrow-key menus and line editing for terminal sessions.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, title: &str, items: &[&str]) -> Result<Selection, CliError> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice.map_or(Selection::Closed, Selection::Chosen))
    }

    fn input(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt.trim_end_matches([' ', ':', '$']))
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }
}

/// Numbered menus answered one line at a time, for piped or scripted input.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn select(&mut self, title: &str, items: &[&str]) -> Result<Selection, CliError> {
        output::section(title);
        for (index, item) in items.iter().enumerate() {
            output::info(format!("{}. {}", index + 1, item));
        }
        let choices: Vec<String> = (1..=items.len()).map(|n| n.to_string()).collect();
        let answer = match self.input(&format!("Enter your choice ({}): ", choices.join("/")))? {
            Some(answer) => answer,
            None => return Ok(Selection::Closed),
        };
        Ok(parse_choice(&answer, items.len()))
    }

    fn input(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        let line = self.read_line()?;
        // Piped answers are not echoed, so end the prompt line here.
        writeln!(stdout)?;
        Ok(line)
    }
}

/// Maps a 1-based menu answer onto an item index.
pub fn parse_choice(answer: &str, item_count: usize) -> Selection {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=item_count).contains(&n) => Selection::Chosen(n - 1),
        _ => Selection::Invalid,
    }
}
