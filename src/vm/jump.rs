//! Jump table: pairs every bracket with its partner before execution.

use std::collections::HashMap;

use super::error::VmError;
use super::instruction::{Instruction, Program};

/// Bidirectional bracket index: `target(a) == Some(b)` iff `target(b) == Some(a)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    targets: HashMap<usize, usize>,
}

impl JumpTable {
    /// Validate bracket nesting and index every bracket pair.
    ///
    /// Fails with `UnbalancedBrackets` on a `]` with no open `[`, or on any
    /// `[` still open at the end of the program (the innermost one is reported).
    pub fn build(program: &Program) -> Result<Self, VmError> {
        let mut targets = HashMap::new();
        let mut open = Vec::new();

        for (pos, instruction) in program.instructions().iter().enumerate() {
            match instruction {
                Instruction::JumpIfZero => open.push(pos),
                Instruction::JumpIfNonZero => {
                    let start = open
                        .pop()
                        .ok_or_else(|| VmError::unbalanced("']' has no matching '['", pos))?;
                    targets.insert(start, pos);
                    targets.insert(pos, start);
                }
                _ => {}
            }
        }

        if let Some(&unclosed) = open.last() {
            return Err(VmError::unbalanced(
                format!("{} '[' left without a matching ']'", open.len()),
                unclosed,
            ));
        }

        tracing::debug!(pairs = targets.len() / 2, "jump table built");
        Ok(Self { targets })
    }

    /// Partner position of the bracket at `pos`.
    pub fn target(&self, pos: usize) -> Option<usize> {
        self.targets.get(&pos).copied()
    }

    /// Number of indexed bracket positions (twice the number of pairs).
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
