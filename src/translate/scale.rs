//! Scale registry: semitone offset → instruction lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vm::Instruction;
use crate::vm::Instruction::*;

/// Number of semitone slots in a table.
pub const SEMITONES: usize = 12;

/// A lookup table from semitone offset (0–11) to instruction.
pub type ScaleTable = [Option<Instruction>; SEMITONES];

static MAJOR: ScaleTable = [
    Some(ShiftRight),
    None,
    Some(ShiftLeft),
    None,
    Some(Increment),
    Some(Decrement),
    None,
    Some(Output),
    Some(Input),
    Some(JumpIfZero),
    None,
    Some(JumpIfNonZero),
];

static MINOR: ScaleTable = [
    Some(ShiftRight),
    None,
    Some(ShiftLeft),
    Some(Increment),
    None,
    Some(Decrement),
    None,
    Some(Output),
    None,
    Some(Input),
    Some(JumpIfZero),
    Some(JumpIfNonZero),
];

static DOMINANT: ScaleTable = [
    Some(ShiftRight),
    None,
    Some(ShiftLeft),
    None,
    Some(Increment),
    Some(Decrement),
    None,
    Some(Output),
    None,
    Some(Input),
    Some(JumpIfZero),
    Some(JumpIfNonZero),
];

/// Which scale the translator reads intervals in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Major,
    Minor,
    Dominant,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::Major, Scale::Minor, Scale::Dominant];

    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::Dominant => "dominant",
        }
    }

    pub fn table(self) -> &'static ScaleTable {
        match self {
            Scale::Major => &MAJOR,
            Scale::Minor => &MINOR,
            Scale::Dominant => &DOMINANT,
        }
    }

    /// Instruction for a semitone offset, or `None` if the slot is empty or
    /// the offset is out of range.
    pub fn lookup(self, semitone: usize) -> Option<Instruction> {
        self.table().get(semitone).copied().flatten()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Scale::ALL.iter().map(|s| s.name()).collect();
                format!("unknown scale '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(scale: Scale) -> String {
        scale
            .table()
            .iter()
            .map(|slot| slot.map_or('_', |i| i.symbol()))
            .collect()
    }

    #[test]
    fn major_table() {
        assert_eq!(symbols(Scale::Major), ">_<_+-_.,[_]");
    }

    #[test]
    fn minor_table() {
        assert_eq!(symbols(Scale::Minor), ">_<+_-_._,[]");
    }

    #[test]
    fn dominant_table() {
        assert_eq!(symbols(Scale::Dominant), ">_<_+-_._,[]");
    }

    #[test]
    fn every_scale_covers_all_eight_instructions() {
        for scale in Scale::ALL {
            for instruction in Instruction::ALL {
                assert!(
                    scale.table().contains(&Some(instruction)),
                    "{scale} is missing {instruction:?}"
                );
            }
        }
    }

    #[test]
    fn lookup_out_of_range_is_none() {
        assert_eq!(Scale::Major.lookup(12), None);
        assert_eq!(Scale::Major.lookup(0), Some(ShiftRight));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("MAJOR".parse::<Scale>(), Ok(Scale::Major));
        assert_eq!("Minor".parse::<Scale>(), Ok(Scale::Minor));
        assert_eq!("dominant".parse::<Scale>(), Ok(Scale::Dominant));
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "lydian".parse::<Scale>().unwrap_err();
        assert!(err.contains("lydian"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&Scale::Dominant).unwrap();
        assert_eq!(yaml.trim(), "dominant");
        let parsed: Scale = serde_yaml::from_str("minor").unwrap();
        assert_eq!(parsed, Scale::Minor);
    }
}
