//! Execution engine: fetch, dispatch, advance over a circular byte tape.

use std::io::Write;

use super::error::VmError;
use super::instruction::{Instruction, Program};
use super::io::InputSource;
use super::jump::JumpTable;

/// Number of cells on the tape.
pub const TAPE_LEN: usize = 30_000;

/// Outcome of a single [`Machine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An instruction ran and the instruction pointer is still inside the program.
    Continue,
    /// The instruction pointer is at or past the end of the program.
    Halted,
}

/// Engine state for one run. Build a fresh one per program execution.
#[derive(Debug, Clone)]
pub struct Machine {
    ip: usize,
    dp: usize,
    tape: Box<[u8]>,
    steps: u64,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            ip: 0,
            dp: 0,
            tape: vec![0; TAPE_LEN].into_boxed_slice(),
            steps: 0,
        }
    }

    /// Run until the instruction pointer leaves the program.
    ///
    /// There is no step limit: a program that never exits its loops never
    /// returns. Use [`Machine::step`] to bound execution from outside.
    pub fn run<I, W>(
        &mut self,
        program: &Program,
        table: &JumpTable,
        input: &mut I,
        output: &mut W,
    ) -> Result<(), VmError>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        while self.step(program, table, input, output)? == Step::Continue {}
        output.flush().map_err(|e| VmError::io(e, self.ip))?;
        tracing::debug!(steps = self.steps, "program halted");
        Ok(())
    }

    /// Execute the instruction under the instruction pointer, then advance it.
    ///
    /// A taken jump sets the pointer to the partner bracket and still advances,
    /// so execution resumes just past the partner.
    pub fn step<I, W>(
        &mut self,
        program: &Program,
        table: &JumpTable,
        input: &mut I,
        output: &mut W,
    ) -> Result<Step, VmError>
    where
        I: InputSource + ?Sized,
        W: Write + ?Sized,
    {
        let Some(instruction) = program.get(self.ip) else {
            return Ok(Step::Halted);
        };

        match instruction {
            Instruction::ShiftRight => {
                self.dp = (self.dp + 1) % TAPE_LEN;
            }
            Instruction::ShiftLeft => {
                self.dp = (self.dp + TAPE_LEN - 1) % TAPE_LEN;
            }
            Instruction::Increment => {
                self.tape[self.dp] = self.tape[self.dp].wrapping_add(1);
            }
            Instruction::Decrement => {
                self.tape[self.dp] = self.tape[self.dp].wrapping_sub(1);
            }
            Instruction::Output => {
                output
                    .write_all(&[self.tape[self.dp]])
                    .map_err(|e| VmError::io(e, self.ip))?;
            }
            Instruction::Input => {
                self.tape[self.dp] = input
                    .read_unit()
                    .map_err(|e| VmError::io(e, self.ip))?
                    .ok_or_else(|| VmError::input_exhausted(self.ip))?;
            }
            Instruction::JumpIfZero => {
                if self.tape[self.dp] == 0 {
                    self.ip = self.jump_target(table)?;
                }
            }
            Instruction::JumpIfNonZero => {
                if self.tape[self.dp] != 0 {
                    self.ip = self.jump_target(table)?;
                }
            }
        }

        self.ip += 1;
        self.steps += 1;

        if self.ip >= program.len() {
            Ok(Step::Halted)
        } else {
            Ok(Step::Continue)
        }
    }

    // Only reachable with a table built for a different program.
    fn jump_target(&self, table: &JumpTable) -> Result<usize, VmError> {
        table
            .target(self.ip)
            .ok_or_else(|| VmError::unbalanced("bracket missing from jump table", self.ip))
    }

    /// Instruction pointer.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Data pointer.
    pub fn dp(&self) -> usize {
        self.dp
    }

    /// Value of the cell under the data pointer.
    pub fn cell(&self) -> u8 {
        self.tape[self.dp]
    }

    pub fn tape(&self) -> &[u8] {
        &self.tape
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
