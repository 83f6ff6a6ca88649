//! Instruction set: the eight symbols a program is made of.

use std::fmt;

/// One instruction of the machine. Operands are implicit: every instruction
/// works on the cell under the data pointer, and brackets resolve through the
/// jump table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Move the data pointer one cell to the right (`>`).
    ShiftRight,
    /// Move the data pointer one cell to the left (`<`).
    ShiftLeft,
    /// Add one to the current cell (`+`).
    Increment,
    /// Subtract one from the current cell (`-`).
    Decrement,
    /// Write the current cell to the output sink (`.`).
    Output,
    /// Read one unit of input into the current cell (`,`).
    Input,
    /// Jump past the matching close bracket if the current cell is zero (`[`).
    JumpIfZero,
    /// Jump back to the matching open bracket if the current cell is nonzero (`]`).
    JumpIfNonZero,
}

impl Instruction {
    pub const ALL: [Instruction; 8] = [
        Instruction::ShiftRight,
        Instruction::ShiftLeft,
        Instruction::Increment,
        Instruction::Decrement,
        Instruction::Output,
        Instruction::Input,
        Instruction::JumpIfZero,
        Instruction::JumpIfNonZero,
    ];

    /// Canonical one-character symbol.
    pub fn symbol(self) -> char {
        match self {
            Instruction::ShiftRight => '>',
            Instruction::ShiftLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::JumpIfZero => '[',
            Instruction::JumpIfNonZero => ']',
        }
    }

    /// Inverse of [`Instruction::symbol`]. Any other character is `None`.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '>' => Some(Instruction::ShiftRight),
            '<' => Some(Instruction::ShiftLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::JumpIfZero),
            ']' => Some(Instruction::JumpIfNonZero),
            _ => None,
        }
    }

    pub fn is_bracket(self) -> bool {
        matches!(self, Instruction::JumpIfZero | Instruction::JumpIfNonZero)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered instruction stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Build a program from symbol text. Characters outside the instruction
    /// alphabet are treated as comments and skipped.
    pub fn from_symbols(text: &str) -> Self {
        Self {
            instructions: text.chars().filter_map(Instruction::from_symbol).collect(),
        }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn get(&self, pos: usize) -> Option<Instruction> {
        self.instructions.get(pos).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_distinct() {
        let mut symbols: Vec<char> = Instruction::ALL.iter().map(|i| i.symbol()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 8);
    }

    #[test]
    fn from_symbol_inverts_symbol() {
        for instruction in Instruction::ALL {
            assert_eq!(Instruction::from_symbol(instruction.symbol()), Some(instruction));
        }
    }

    #[test]
    fn unknown_symbol_is_none() {
        assert_eq!(Instruction::from_symbol('x'), None);
        assert_eq!(Instruction::from_symbol(' '), None);
    }

    #[test]
    fn from_symbols_skips_comments() {
        let program = Program::from_symbols("+ add one\n. print it");
        assert_eq!(
            program.instructions(),
            &[Instruction::Increment, Instruction::Output]
        );
    }

    #[test]
    fn display_renders_symbol_text() {
        let program = Program::from_symbols("+[-]>.");
        assert_eq!(program.to_string(), "+[-]>.");
    }

    #[test]
    fn brackets() {
        assert!(Instruction::JumpIfZero.is_bracket());
        assert!(Instruction::JumpIfNonZero.is_bracket());
        assert!(!Instruction::Output.is_bracket());
    }

    #[test]
    fn empty_program() {
        let program = Program::from_symbols("");
        assert!(program.is_empty());
        assert_eq!(program.get(0), None);
    }
}
