//! Pitch-class arithmetic and note names.
//!
//! Pitch classes are `u8` values 0..12 (C=0 … B=11). MIDI pitches are `u8`
//! and reduce to a pitch class with [`pitch_class`].

use crate::error::FretboardError;

/// Note names indexed by pitch class. Sharps are used for display.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Reduce a MIDI pitch (or any semitone count) to its pitch class.
pub fn pitch_class(midi: u8) -> u8 {
    midi % 12
}

/// Semitone distance from `root` up to `pc`, in 0..12.
pub fn degree(pc: u8, root: u8) -> u8 {
    (pc % 12 + 12 - root % 12) % 12
}

/// Display name for a pitch class.
pub fn note_name(pc: u8) -> &'static str {
    NOTE_NAMES[(pc % 12) as usize]
}

/// Parse a note name like `C`, `F#` or `Bb` into a pitch class.
///
/// # Example
/// ```
/// use fretboard::notes::parse_note;
///
/// assert_eq!(parse_note("C").unwrap(), 0);
/// assert_eq!(parse_note("F#").unwrap(), 6);
/// assert_eq!(parse_note("Bb").unwrap(), 10);
/// assert!(parse_note("H").is_err());
/// ```
pub fn parse_note(name: &str) -> Result<u8, FretboardError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let invalid = || FretboardError::InvalidNote(trimmed.to_string());

    let base: i8 = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => return Err(invalid()),
    };
    let accidental: i8 = match chars.as_str() {
        "" => 0,
        "#" | "s" => 1,
        "b" | "f" => -1,
        _ => return Err(invalid()),
    };

    Ok((base + accidental).rem_euclid(12) as u8)
}

/// A set of pitch classes stored as a 12-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, pc: u8) {
        self.0 |= 1 << (pc % 12);
    }

    pub fn contains(&self, pc: u8) -> bool {
        self.0 & (1 << (pc % 12)) != 0
    }

    /// True when every pitch class of `other` is also in `self`.
    pub fn is_superset(&self, other: &PitchClassSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Pitch classes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..12u8).filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<u8> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_of_standard_strings() {
        // E2 A2 D3 G3 B3 E4
        let pcs: Vec<u8> = [40, 45, 50, 55, 59, 64].iter().map(|m| pitch_class(*m)).collect();
        assert_eq!(pcs, vec![4, 9, 2, 7, 11, 4]);
    }

    #[test]
    fn test_degree_wraps_below_root() {
        assert_eq!(degree(0, 0), 0);
        assert_eq!(degree(4, 0), 4);
        assert_eq!(degree(2, 7), 7); // D over G is a fifth
        assert_eq!(degree(11, 0), 11);
    }

    #[test]
    fn test_parse_note_spellings() {
        assert_eq!(parse_note("c").unwrap(), 0);
        assert_eq!(parse_note("Cb").unwrap(), 11);
        assert_eq!(parse_note("E#").unwrap(), 5);
        assert_eq!(parse_note("Gs").unwrap(), 8);
        assert_eq!(parse_note(" A ").unwrap(), 9);
    }

    #[test]
    fn test_parse_note_rejects_garbage() {
        assert_eq!(parse_note(""), Err(FretboardError::InvalidNote(String::new())));
        assert!(parse_note("X").is_err());
        assert!(parse_note("C##").is_err());
    }

    #[test]
    fn test_pitch_class_set_superset() {
        let c_major: PitchClassSet = [0, 4, 7].into_iter().collect();
        let mut found = PitchClassSet::new();
        found.insert(12); // wraps to C
        found.insert(4);
        assert!(!found.is_superset(&c_major));
        found.insert(19); // G
        found.insert(2);
        assert!(found.is_superset(&c_major));
        assert_eq!(found.len(), 4);
        assert_eq!(found.iter().collect::<Vec<_>>(), vec![0, 2, 4, 7]);
    }
}
