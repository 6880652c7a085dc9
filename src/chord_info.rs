//! Note and interval breakdown of a chord, for display next to the fretboard.
//!
//! This is a read-only projection of the interval formula. It does not look at
//! any voicing.

use serde::Serialize;

use crate::chords::{IntervalFormula, ELEVENTH, NINTH, THIRTEENTH};
use crate::notes::{degree, note_name};

const DEGREE_LABELS: [&str; 12] = [
    "R", "b2", "2", "b3", "3", "4", "#4", "5", "b6", "6", "b7", "7",
];

const INTERVAL_NAMES: [&str; 12] = [
    "P1", "m2", "M2", "m3", "M3", "P4", "TT", "P5", "m6", "M6", "m7", "M7",
];

/// One chord tone: its note name, scale degree and interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordToneRow {
    pub note: &'static str,
    pub degree: &'static str,
    pub interval: &'static str,
}

/// Break a formula down into rows ordered root, 3rd, 5th, 7th, 9th, 11th, 13th,
/// then anything else by semitone.
///
/// # Example
/// ```
/// use fretboard::{chord_info, resolve, ChordQuality, Extensions};
///
/// let rows = chord_info(7, &resolve(ChordQuality::Dom9, Extensions::none()));
/// let notes: Vec<_> = rows.iter().map(|r| r.note).collect();
/// assert_eq!(notes, vec!["G", "B", "D", "F", "A"]);
/// assert_eq!(rows[4].degree, "9");
/// ```
pub fn chord_info(root: u8, formula: &IntervalFormula) -> Vec<ChordToneRow> {
    let mut intervals: Vec<u8> = formula.intervals().to_vec();
    intervals.sort_by_key(|&iv| tone_order(iv));

    intervals
        .into_iter()
        .map(|iv| ChordToneRow {
            note: note_name((root % 12 + iv % 12) % 12),
            degree: interval_degree(iv),
            interval: interval_name(iv),
        })
        .collect()
}

/// Degree label for a sounding pitch class, e.g. for marking a fretted note.
pub fn degree_label(pc: u8, root: u8) -> &'static str {
    DEGREE_LABELS[degree(pc, root) as usize]
}

fn interval_degree(iv: u8) -> &'static str {
    match iv {
        NINTH => "9",
        ELEVENTH => "11",
        THIRTEENTH => "13",
        _ => DEGREE_LABELS[(iv % 12) as usize],
    }
}

fn interval_name(iv: u8) -> &'static str {
    match iv {
        NINTH => "9",
        ELEVENTH => "11",
        THIRTEENTH => "13",
        _ => INTERVAL_NAMES[(iv % 12) as usize],
    }
}

fn tone_order(iv: u8) -> u8 {
    match iv {
        0 => 0,
        3 | 4 => 1,
        7 => 2,
        10 | 11 => 3,
        NINTH => 4,
        ELEVENTH => 5,
        THIRTEENTH => 6,
        _ => 10 + iv % 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::{resolve, ChordQuality, Extensions};

    fn labels(rows: &[ChordToneRow]) -> Vec<(&str, &str, &str)> {
        rows.iter().map(|r| (r.note, r.degree, r.interval)).collect()
    }

    #[test]
    fn test_c_maj7() {
        let rows = chord_info(0, &resolve(ChordQuality::Maj7, Extensions::none()));
        assert_eq!(
            labels(&rows),
            vec![("C", "R", "P1"), ("E", "3", "M3"), ("G", "5", "P5"), ("B", "7", "M7")]
        );
    }

    #[test]
    fn test_compound_intervals_keep_their_labels() {
        let rows = chord_info(0, &resolve(ChordQuality::Dom13, Extensions::none()));
        assert_eq!(
            labels(&rows),
            vec![
                ("C", "R", "P1"),
                ("E", "3", "M3"),
                ("G", "5", "P5"),
                ("A#", "b7", "m7"),
                ("D", "9", "9"),
                ("A", "13", "13"),
            ]
        );
    }

    #[test]
    fn test_sus_tones_sort_after_chord_tones() {
        let rows = chord_info(2, &resolve(ChordQuality::Major, Extensions::none().with_sus4()));
        assert_eq!(labels(&rows), vec![("D", "R", "P1"), ("A", "5", "P5"), ("G", "4", "P4")]);
    }

    #[test]
    fn test_sixth_and_flat_five() {
        let rows = chord_info(0, &resolve(ChordQuality::Sixth, Extensions::none()));
        assert_eq!(rows[3], ChordToneRow { note: "A", degree: "6", interval: "M6" });

        let rows = chord_info(0, &resolve(ChordQuality::HalfDim7, Extensions::none()));
        // b5 has no chord-tone slot, so it follows the seventh
        assert_eq!(labels(&rows)[3], ("F#", "#4", "TT"));
    }

    #[test]
    fn test_degree_label_for_fretted_notes() {
        assert_eq!(degree_label(4, 0), "3");
        assert_eq!(degree_label(0, 7), "4");
        assert_eq!(degree_label(9, 9), "R");
    }
}
