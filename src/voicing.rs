//! # Voicing Types
//!
//! A [`Voicing`] is one concrete way to play a chord: a fret or a mute for
//! every string, plus metadata derived from that assignment.
//!
//! ## Fields
//! - `strings`: per-string [`StringState`], low string first
//! - `inversion`: which chord tone sounds lowest
//! - `span`: distance between the lowest and highest *fretted* string.
//!   Open strings never widen the span.
//! - `anchor`: lowest fretted position, `None` when nothing is fretted
//! - `fretted_range`: `(min, max)` fretted positions, `(0, 0)` when nothing is fretted
//!
//! ## Scoring
//! [`playability_score`] ranks voicings; higher is better:
//! - `-span` (compact shapes first)
//! - `+2` when the bass note is the root
//! - `-1` per muted string, `+0.25` per sounding string
//! - `+0.2` per pair of adjacent strings on the same fret (open strings count)
//!
//! [`position_penalty`] subtracts `2 × |anchor - position|` when a neck
//! position is preferred; an all-open voicing counts as anchored at fret 1.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::notes::degree;
use crate::tuning::Tuning;

/// What one string does in a voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringState {
    Muted,
    /// Fret number; 0 is the open string.
    Fret(u8),
}

impl StringState {
    pub fn fret(&self) -> Option<u8> {
        match self {
            StringState::Muted => None,
            StringState::Fret(f) => Some(*f),
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self, StringState::Muted)
    }

    /// A sounding string held down behind a fret (not open, not muted).
    pub fn is_fretted(&self) -> bool {
        matches!(self, StringState::Fret(f) if *f > 0)
    }
}

// Muted strings serialize as "x", frets as their number.
impl Serialize for StringState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StringState::Muted => serializer.serialize_str("x"),
            StringState::Fret(f) => serializer.serialize_u8(*f),
        }
    }
}

impl fmt::Display for StringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringState::Muted => f.write_str("x"),
            StringState::Fret(n) => write!(f, "{}", n),
        }
    }
}

/// Chord tone in the bass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Inversion {
    #[serde(rename = "root")]
    Root,
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

impl Inversion {
    /// Classify by the bass note's distance above the root.
    ///
    /// Only thirds, fifths and sevenths select an inversion. Any other bass
    /// degree (a 9th, 11th or 13th, a sus tone) is reported as `Root`.
    pub fn from_bass_degree(degree: u8) -> Self {
        match degree % 12 {
            3 | 4 => Inversion::First,
            7 => Inversion::Second,
            10 | 11 => Inversion::Third,
            _ => Inversion::Root,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Inversion::Root => "root",
            Inversion::First => "1st",
            Inversion::Second => "2nd",
            Inversion::Third => "3rd",
        }
    }
}

impl fmt::Display for Inversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One playable fingering of a chord.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub strings: Vec<StringState>,
    pub inversion: Inversion,
    pub span: u8,
    pub anchor: Option<u8>,
    pub fretted_range: (u8, u8),
}

impl Voicing {
    /// Derive the metadata for a complete string assignment.
    pub fn from_strings(strings: Vec<StringState>, root: u8, tuning: &Tuning) -> Self {
        let fretted = strings.iter().filter(|s| s.is_fretted()).filter_map(|s| s.fret());
        let (min, max) = fretted.fold((None, None), |(lo, hi): (Option<u8>, Option<u8>), f| {
            (
                Some(lo.map_or(f, |l| l.min(f))),
                Some(hi.map_or(f, |h| h.max(f))),
            )
        });

        let inversion = bass_pitch_class(&strings, tuning)
            .map(|pc| Inversion::from_bass_degree(degree(pc, root)))
            .unwrap_or(Inversion::Root);

        let fretted_range = match (min, max) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => (0, 0),
        };

        Self {
            strings,
            inversion,
            span: fretted_range.1 - fretted_range.0,
            anchor: min,
            fretted_range,
        }
    }

    pub fn muted_count(&self) -> usize {
        self.strings.iter().filter(|s| s.is_muted()).count()
    }

    pub fn sounding_count(&self) -> usize {
        self.strings.len() - self.muted_count()
    }

    /// True when no string is fretted (every sounding string is open).
    pub fn is_all_open(&self) -> bool {
        self.fretted_range == (0, 0)
    }

    /// Anchor used for position comparisons: an all-open voicing sits at fret 1.
    pub fn effective_anchor(&self) -> u8 {
        self.anchor.unwrap_or(1)
    }

    /// Pitch class of the lowest sounding string.
    pub fn bass_pitch_class(&self, tuning: &Tuning) -> Option<u8> {
        bass_pitch_class(&self.strings, tuning)
    }
}

/// Compact shape: `x32010` when every fret is a single digit, otherwise
/// dash separated (`8-10-10-9-8-8`).
impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self.strings.iter().any(|s| s.fret().is_some_and(|n| n > 9));
        let parts: Vec<String> = self.strings.iter().map(|s| s.to_string()).collect();
        if wide {
            f.write_str(&parts.join("-"))
        } else {
            f.write_str(&parts.concat())
        }
    }
}

fn bass_pitch_class(strings: &[StringState], tuning: &Tuning) -> Option<u8> {
    strings
        .iter()
        .enumerate()
        .find_map(|(i, s)| s.fret().map(|f| tuning.pitch_class_at(i, f)))
}

/// Position-independent playability score; higher is better.
pub fn playability_score(voicing: &Voicing, root: u8, tuning: &Tuning) -> f64 {
    let root_in_bass = voicing.bass_pitch_class(tuning) == Some(root % 12);

    let same_fret_pairs = voicing
        .strings
        .windows(2)
        .filter(|pair| matches!((pair[0], pair[1]), (StringState::Fret(a), StringState::Fret(b)) if a == b))
        .count();

    let root_bonus = if root_in_bass { 2.0 } else { 0.0 };

    -(voicing.span as f64) + root_bonus - voicing.muted_count() as f64
        + voicing.sounding_count() as f64 * 0.25
        + same_fret_pairs as f64 * 0.2
}

/// Penalty for sitting away from the preferred neck position.
pub fn position_penalty(voicing: &Voicing, preferred_position: u8) -> f64 {
    let distance = (voicing.effective_anchor() as i32 - preferred_position as i32).abs();
    distance as f64 * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::StringState::{Fret, Muted};

    fn c_shape() -> Vec<StringState> {
        vec![Muted, Fret(3), Fret(2), Fret(0), Fret(1), Fret(0)]
    }

    #[test]
    fn test_open_c_metadata() {
        let v = Voicing::from_strings(c_shape(), 0, &Tuning::standard());
        assert_eq!(v.inversion, Inversion::Root);
        assert_eq!(v.span, 2);
        assert_eq!(v.anchor, Some(1));
        assert_eq!(v.fretted_range, (1, 3));
        assert_eq!(v.to_string(), "x32010");
    }

    #[test]
    fn test_open_strings_do_not_widen_span() {
        let v = Voicing::from_strings(
            vec![Fret(0), Fret(7), Fret(9), Fret(0), Fret(0), Fret(0)],
            9,
            &Tuning::standard(),
        );
        assert_eq!(v.span, 2);
        assert_eq!(v.fretted_range, (7, 9));
        // Low E open over A root
        assert_eq!(v.inversion, Inversion::Second);
    }

    #[test]
    fn test_all_open_voicing() {
        let v = Voicing::from_strings(
            vec![Fret(0), Muted, Muted, Fret(0), Fret(0), Fret(0)],
            4,
            &Tuning::standard(),
        );
        assert!(v.is_all_open());
        assert_eq!(v.anchor, None);
        assert_eq!(v.effective_anchor(), 1);
        assert_eq!(v.span, 0);
    }

    #[test]
    fn test_frets_past_the_neck_do_not_overflow() {
        let v = Voicing::from_strings(vec![Fret(250); 6], 2, &Tuning::standard());
        assert_eq!(v.span, 0);
        assert_eq!(v.anchor, Some(250));
        // Low E at 250 sounds D, the root
        assert_eq!(v.inversion, Inversion::Root);
    }

    #[test]
    fn test_inversion_classification() {
        assert_eq!(Inversion::from_bass_degree(0), Inversion::Root);
        assert_eq!(Inversion::from_bass_degree(3), Inversion::First);
        assert_eq!(Inversion::from_bass_degree(4), Inversion::First);
        assert_eq!(Inversion::from_bass_degree(7), Inversion::Second);
        assert_eq!(Inversion::from_bass_degree(10), Inversion::Third);
        assert_eq!(Inversion::from_bass_degree(11), Inversion::Third);
        // 9th in the bass stays "root"
        assert_eq!(Inversion::from_bass_degree(2), Inversion::Root);
        assert_eq!(Inversion::from_bass_degree(9), Inversion::Root);
    }

    #[test]
    fn test_score_open_c() {
        let tuning = Tuning::standard();
        let v = Voicing::from_strings(c_shape(), 0, &tuning);
        // -2 span + 2 root - 1 mute + 5 * 0.25
        assert!((playability_score(&v, 0, &tuning) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_score_rewards_same_fret_neighbours() {
        let tuning = Tuning::standard();
        let barre = Voicing::from_strings(
            vec![Fret(8), Fret(10), Fret(10), Fret(9), Fret(8), Fret(8)],
            0,
            &tuning,
        );
        // -2 + 2 + 1.5 + 2 * 0.2
        assert!((playability_score(&barre, 0, &tuning) - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_fewer_mutes_score_higher() {
        let tuning = Tuning::standard();
        let full = Voicing::from_strings(c_shape(), 0, &tuning);
        let thinner = Voicing::from_strings(
            vec![Muted, Fret(3), Fret(2), Fret(0), Fret(1), Muted],
            0,
            &tuning,
        );
        assert_eq!(full.span, thinner.span);
        assert!(playability_score(&full, 0, &tuning) > playability_score(&thinner, 0, &tuning));
    }

    #[test]
    fn test_position_penalty() {
        let v = Voicing::from_strings(c_shape(), 0, &Tuning::standard());
        assert_eq!(position_penalty(&v, 1), 0.0);
        assert_eq!(position_penalty(&v, 5), 8.0);
    }

    #[test]
    fn test_wide_shape_display() {
        let v = Voicing::from_strings(
            vec![Fret(8), Fret(10), Fret(10), Fret(9), Fret(8), Fret(8)],
            0,
            &Tuning::standard(),
        );
        assert_eq!(v.to_string(), "8-10-10-9-8-8");
    }

    #[test]
    fn test_serializes_mutes_as_x() {
        let v = Voicing::from_strings(c_shape(), 0, &Tuning::standard());
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains(r#""strings":["x",3,2,0,1,0]"#));
        assert!(json.contains(r#""inversion":"root""#));
        assert!(json.contains(r#""frettedRange":[1,3]"#));
    }
}
