//! Error types for translation, jump-table construction and execution.

use std::fmt;
use std::io;

/// An error that stopped a program from being built or run.
#[derive(Debug, Clone)]
pub struct VmError {
    pub message: String,
    /// Instruction position the error refers to, when there is one.
    pub position: Option<usize>,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No note-start event among the leading simultaneous events.
    NoRootNote,
    /// A close bracket without an open one, or an open bracket left unclosed.
    UnbalancedBrackets,
    /// An `Input` instruction found no input available.
    InputExhausted,
    /// Writing to the output sink failed.
    Io,
}

impl VmError {
    pub fn no_root_note(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
            kind: ErrorKind::NoRootNote,
        }
    }

    pub fn unbalanced(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
            kind: ErrorKind::UnbalancedBrackets,
        }
    }

    pub fn input_exhausted(position: usize) -> Self {
        Self {
            message: "no input available".to_string(),
            position: Some(position),
            kind: ErrorKind::InputExhausted,
        }
    }

    pub fn io(err: io::Error, position: usize) -> Self {
        Self {
            message: err.to_string(),
            position: Some(position),
            kind: ErrorKind::Io,
        }
    }
}

impl fmt::Display for VmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{:?} at instruction {}: {}", self.kind, pos, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for VmError {}
