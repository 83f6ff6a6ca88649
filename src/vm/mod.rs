//! Symbolic virtual machine: instruction set, jump table and execution engine.
//!
//! [`Interpreter`] wires the stages together: translate a track into a
//! [`Program`], validate and index its brackets in a [`JumpTable`], then run it
//! on a fresh [`Machine`].

pub mod error;
pub mod instruction;
pub mod io;
pub mod jump;
pub mod machine;

pub use error::{ErrorKind, VmError};
pub use instruction::{Instruction, Program};
pub use io::{ByteInput, InputSource, LineInput};
pub use jump::JumpTable;
pub use machine::{Machine, Step, TAPE_LEN};

use std::io::Write;

use crate::translate::{translate, NoteEvent, Scale};

/// Runs note tracks as programs in one scale.
///
/// Holds no per-run state, so one interpreter can serve any number of runs,
/// including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    scale: Scale,
}

impl Interpreter {
    pub fn new(scale: Scale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Translate a track into a program without running it.
    pub fn transpile(&self, events: &[NoteEvent]) -> Result<Program, VmError> {
        translate(events, self.scale)
    }

    /// Translate and run a track. Returns the machine in its final state.
    pub fn evaluate<I, W>(
        &self,
        events: &[NoteEvent],
        input: &mut I,
        output: &mut W,
    ) -> Result<Machine, VmError>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        let program = self.transpile(events)?;
        self.run_program(&program, input, output)
    }

    /// Build the jump table for `program` and run it on a fresh machine.
    pub fn run_program<I, W>(
        &self,
        program: &Program,
        input: &mut I,
        output: &mut W,
    ) -> Result<Machine, VmError>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        let table = JumpTable::build(program)?;
        let mut machine = Machine::new();
        machine.run(program, &table, input, output)?;
        Ok(machine)
    }
}
