//! Standard MIDI File loading: decodes one track into [`NoteEvent`]s.
//!
//! Every track event becomes one note event so delta times stay exactly as
//! stored. Any note-on message is a note start, whatever its velocity.

use std::io;
use std::path::Path;

use midly::{MidiMessage, Smf, TrackEventKind};

use crate::translate::NoteEvent;

/// Read a `.mid` file and decode track `track_index`.
pub fn load_track(path: &Path, track_index: usize) -> io::Result<Vec<NoteEvent>> {
    let bytes = std::fs::read(path)?;
    track_events(&bytes, track_index)
}

/// Decode track `track_index` from raw SMF bytes.
pub fn track_events(bytes: &[u8], track_index: usize) -> io::Result<Vec<NoteEvent>> {
    let smf = parse(bytes)?;
    let count = smf.tracks.len();
    let track = smf.tracks.get(track_index).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("track {track_index} out of range (file has {count} tracks)"),
        )
    })?;

    let events: Vec<NoteEvent> = track
        .iter()
        .map(|event| {
            let delta = event.delta.as_int();
            match event.kind {
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOn { key, .. },
                    ..
                } => NoteEvent::note_on(i32::from(key.as_int()), delta),
                TrackEventKind::Midi {
                    message: MidiMessage::NoteOff { key, .. },
                    ..
                } => NoteEvent::note_off(i32::from(key.as_int()), delta),
                _ => NoteEvent::other(delta),
            }
        })
        .collect();

    tracing::debug!(track = track_index, events = events.len(), "track decoded");
    Ok(events)
}

/// Number of tracks in raw SMF bytes.
pub fn track_count(bytes: &[u8]) -> io::Result<usize> {
    Ok(parse(bytes)?.tracks.len())
}

fn parse(bytes: &[u8]) -> io::Result<Smf<'_>> {
    Smf::parse(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("MIDI parse: {e}")))
}
