use std::fmt;

use serde::Serialize;

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[0;0f";

const MESSAGE_HEADER: &str = "-- message -- ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Section { heading: String, lines: Vec<String> },
    Message(String),
    Prompt(String),
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Title(s.into()));
    }

    pub fn say(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Text(s.into()));
    }

    pub fn section<I, S>(&mut self, heading: impl Into<String>, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.push(OutputBlock::Section {
            heading: heading.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        });
    }

    pub fn message(&mut self, s: impl Into<String>) {
        // only the latest command's message is ever shown
        self.blocks.retain(|b| !matches!(b, OutputBlock::Message(_)));
        self.blocks.push(OutputBlock::Message(s.into()));
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Prompt(s.into()));
    }

    pub fn message_text(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            OutputBlock::Message(m) => Some(m.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for OutputBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputBlock::Title(t) | OutputBlock::Text(t) => writeln!(f, "{} ", t),
            OutputBlock::Section { heading, lines } => {
                writeln!(f, "{} ", heading)?;
                writeln!(f, "{}", lines.join("\n"))
            }
            OutputBlock::Message(m) => {
                writeln!(f, "{}", MESSAGE_HEADER)?;
                writeln!(f, "{}", m)
            }
            OutputBlock::Prompt(p) => f.write_str(p),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}
