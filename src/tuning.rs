//! Six-string tunings.

use serde::Serialize;

use crate::error::FretboardError;
use crate::notes::{note_name, pitch_class};

/// Number of strings every tuning has.
pub const STRING_COUNT: usize = 6;

/// Highest fret the generator will ever consider.
pub const MAX_FRET: u8 = 24;

/// Open-string MIDI pitches, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tuning(Vec<u8>);

impl Tuning {
    /// Build a tuning from open-string MIDI pitches, low string first.
    ///
    /// # Errors
    /// Returns [`FretboardError::InvalidTuning`] unless there are exactly
    /// [`STRING_COUNT`] strings and every string stays within MIDI range up to
    /// [`MAX_FRET`].
    pub fn new(open_strings: Vec<u8>) -> Result<Self, FretboardError> {
        if open_strings.len() != STRING_COUNT {
            return Err(FretboardError::InvalidTuning(format!(
                "expected {} strings, got {}",
                STRING_COUNT,
                open_strings.len()
            )));
        }
        if let Some(&pitch) = open_strings.iter().find(|&&p| p > 127 - MAX_FRET) {
            return Err(FretboardError::InvalidTuning(format!(
                "open pitch {} leaves no room for {} frets",
                pitch, MAX_FRET
            )));
        }
        Ok(Self(open_strings))
    }

    /// Standard EADGBE: E2 A2 D3 G3 B3 E4.
    pub fn standard() -> Self {
        Self(vec![40, 45, 50, 55, 59, 64])
    }

    pub fn open_strings(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// MIDI pitch sounded by `string` at `fret`.
    ///
    /// `fret` must be at most [`MAX_FRET`]; [`Tuning::new`] guarantees the
    /// result is then a valid MIDI note.
    pub fn pitch_at(&self, string: usize, fret: u8) -> u8 {
        self.0[string] + fret
    }

    /// Pitch class sounded by `string` at `fret`. Defined for any fret.
    pub fn pitch_class_at(&self, string: usize, fret: u8) -> u8 {
        ((self.0[string] as u16 + fret as u16) % 12) as u8
    }

    /// Open-string note names, e.g. `["E", "A", "D", "G", "B", "E"]`.
    pub fn string_names(&self) -> Vec<&'static str> {
        self.0.iter().map(|&p| note_name(pitch_class(p))).collect()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tuning() {
        let tuning = Tuning::standard();
        assert_eq!(tuning.string_names(), vec!["E", "A", "D", "G", "B", "E"]);
        assert_eq!(tuning.pitch_at(1, 3), 48); // C3
        assert_eq!(tuning.pitch_class_at(4, 1), 0);
    }

    #[test]
    fn test_pitch_class_past_last_fret() {
        let tuning = Tuning::standard();
        assert_eq!(tuning.pitch_class_at(0, MAX_FRET), 4);
        // 40 + 250 = 290
        assert_eq!(tuning.pitch_class_at(0, 250), 2);
        assert_eq!(tuning.pitch_class_at(5, u8::MAX), ((64u16 + 255) % 12) as u8);
    }

    #[test]
    fn test_drop_d_is_valid() {
        let tuning = Tuning::new(vec![38, 45, 50, 55, 59, 64]).unwrap();
        assert_eq!(tuning.string_names()[0], "D");
    }

    #[test]
    fn test_wrong_string_count() {
        let result = Tuning::new(vec![40, 45, 50, 55]);
        assert!(matches!(result, Err(FretboardError::InvalidTuning(msg)) if msg.contains("expected 6")));
    }

    #[test]
    fn test_pitch_too_high() {
        assert!(Tuning::new(vec![40, 45, 50, 55, 59, 120]).is_err());
    }
}
