use crate::{msg::Msg, parser::Line};
use strum::Display;
use thiserror::Error;

/// Field of a C-instruction a mnemonic was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Dest,
    Comp,
    Jump,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed command: `{0}`")]
    MalformedCommand(String),

    #[error("Unknown {field} mnemonic: `{mnemonic}`")]
    UnknownMnemonic { field: Field, mnemonic: String },

    #[error("Address out of range: `{0}` does not fit in 15 bits")]
    AddressOutOfRange(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read input")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// A translation error together with the line that caused it.
#[derive(Error, Debug)]
#[error("line {}: {}", .line.no(), .error)]
pub struct Diag {
    pub line: Line,
    pub error: Error,
}

impl Diag {
    pub fn new(line: &Line, error: Error) -> Self {
        Diag {
            line: line.clone(),
            error,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print(&self, path: &str, use_color: bool) {
        Msg::Error(self.error.to_string()).print(path, &self.line, use_color);
    }
}

/// A label declared more than once. The first binding is kept.
#[derive(Debug, Clone)]
pub struct Redefined {
    pub name: String,
    pub line: Line,
    /// `None` when the first binding is a predefined symbol.
    pub prev: Option<Line>,
}

impl Redefined {
    pub fn print(&self, path: &str, use_color: bool) {
        Msg::Warn(format!("Re-defined label: `{}`", self.name)).print(path, &self.line, use_color);
        match &self.prev {
            Some(prev) => Msg::Note(
                "Already defined here. The first definition is kept.".to_string(),
            )
            .print(path, prev, use_color),
            None => Msg::Note(format!(
                "`{}` is a predefined symbol. The declaration is ignored.",
                self.name
            ))
            .print(path, &self.line, use_color),
        }
    }
}
