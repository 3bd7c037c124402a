use std::io::{self, Write};

const SEPARATOR: &str = "========================================";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// Header shown every time the player stands in a room.
    Room(String),
    Text(String),
    /// Feedback on a choice that did not move the player.
    Notice(String),
    /// One line per available option.
    Menu(Vec<String>),
    Prompt(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(&mut self, name: impl Into<String>) {
        self.blocks.push(OutputBlock::Room(name.into()));
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn notice(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Notice(s));
        }
    }

    pub fn menu(&mut self, options: Vec<String>) {
        if !options.is_empty() {
            self.blocks.push(OutputBlock::Menu(options));
        }
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        // only one prompt, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Prompt(_)));
        self.blocks.push(OutputBlock::Prompt(s.into()));
    }

    pub fn notices(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            OutputBlock::Notice(n) => Some(n.as_str()),
            _ => None,
        })
    }
}

/// Writes the buffered blocks to a console-like sink.
pub fn flush_output<W: Write>(out: Output, w: &mut W) -> io::Result<()> {
    for block in out.blocks {
        match block {
            OutputBlock::Room(name) => {
                writeln!(w, "\n{}", SEPARATOR)?;
                writeln!(w, "Voce esta em: {}", name)?;
            }
            OutputBlock::Text(line) | OutputBlock::Notice(line) => {
                writeln!(w, "{}", line)?;
            }
            OutputBlock::Menu(options) => {
                writeln!(w, "Escolha seu caminho:")?;
                for opt in options {
                    writeln!(w, " {}", opt)?;
                }
            }
            OutputBlock::Prompt(p) => {
                write!(w, "{}", p)?;
            }
        }
    }
    w.flush()
}
