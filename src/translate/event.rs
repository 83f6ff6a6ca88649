//! Note event model: the translator's only view of a decoded track.

/// One timed event from a track.
///
/// Only note starts carry meaning for translation; every other event is still
/// kept so that delta times line up with the track they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// MIDI note number. Zero for events that are not notes.
    pub pitch: i32,
    /// Ticks since the previous event in the track.
    pub delta_time: u32,
    pub is_note_start: bool,
}

impl NoteEvent {
    /// A note-start event.
    pub fn note_on(pitch: i32, delta_time: u32) -> Self {
        Self {
            pitch,
            delta_time,
            is_note_start: true,
        }
    }

    /// A note-stop event. Ignored by the translator apart from its delta time.
    pub fn note_off(pitch: i32, delta_time: u32) -> Self {
        Self {
            pitch,
            delta_time,
            is_note_start: false,
        }
    }

    /// Any other track event (meta, controller, sysex).
    pub fn other(delta_time: u32) -> Self {
        Self {
            pitch: 0,
            delta_time,
            is_note_start: false,
        }
    }
}
