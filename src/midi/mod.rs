//! MIDI-Routing zwischen Prozessoren (ohne Nachrichten-Parsing).

pub mod connector_in;

pub use connector_in::{MidiConnectorIn, MidiEvent, MidiSource, SharedMidiSource};
