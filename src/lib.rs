//! Bebop: runs MIDI tracks as programs.
//!
//! Intervals from a track's root note are read as instructions of an
//! eight-symbol tape machine, which is then executed over a circular byte tape.

pub mod config;
pub mod midi;
pub mod translate;
pub mod vm;
