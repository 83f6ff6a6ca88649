//! Note translator: reads a track's intervals against its root note and turns
//! them into an instruction stream.
//!
//! The leading run of simultaneous events (delta time zero) sets the root: the
//! lowest pitch among its note starts. Every later note start becomes the
//! instruction its interval from the root maps to in the chosen [`Scale`].

pub mod event;
pub mod scale;

pub use event::NoteEvent;
pub use scale::{Scale, ScaleTable, SEMITONES};

use crate::vm::{Program, VmError};

/// Find the root note and the index where the body of the track begins.
///
/// The body starts at the first event with a nonzero delta time, or at the end
/// of the sequence if there is none.
pub fn find_root(events: &[NoteEvent]) -> Result<(i32, usize), VmError> {
    let body_start = events
        .iter()
        .position(|e| e.delta_time > 0)
        .unwrap_or(events.len());

    let root = events[..body_start]
        .iter()
        .filter(|e| e.is_note_start)
        .map(|e| e.pitch)
        .min()
        .ok_or_else(|| {
            VmError::no_root_note(format!(
                "no note starts among the {body_start} leading simultaneous events"
            ))
        })?;

    Ok((root, body_start))
}

/// Semitone offset of `pitch` from `root`, in `0..12`.
///
/// Notes below the root count down from the octave: a major third below the
/// root (distance 4) lands on 8, not 4. Whole octaves below fold to 0.
pub fn semitone_offset(pitch: i32, root: i32) -> usize {
    let semitone = pitch.abs_diff(root) as usize % SEMITONES;
    if pitch < root {
        (SEMITONES - semitone) % SEMITONES
    } else {
        semitone
    }
}

/// Translate a track into a program.
///
/// Non-note-start events and notes landing on empty scale slots produce
/// nothing. Fails only when there is no root note.
pub fn translate(events: &[NoteEvent], scale: Scale) -> Result<Program, VmError> {
    let (root, body_start) = find_root(events)?;

    let program: Program = events[body_start..]
        .iter()
        .filter(|e| e.is_note_start)
        .filter_map(|e| scale.lookup(semitone_offset(e.pitch, root)))
        .collect();

    tracing::debug!(
        root,
        %scale,
        events = events.len(),
        instructions = program.len(),
        "track translated"
    );
    Ok(program)
}
