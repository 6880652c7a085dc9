//! # Chord Formulas
//!
//! Maps a chord quality and an extension selection to an [`IntervalFormula`]:
//! chord tones as semitones above the root.
//!
//! ## Interval values
//! - `0..=11` - simple intervals within the octave
//! - `14`, `17`, `21` - the 9th, 11th and 13th. These compound markers are
//!   reduced modulo 12 when matching pitch classes on the fretboard, but keep
//!   their compound value for labeling (see `chord_info`).
//!
//! ## Extensions
//! - **sus2** replaces the whole formula with `[0, 2, 7]`
//! - **sus4** replaces the whole formula with `[0, 5, 7]`
//! - **add9** appends `14` unless the formula already has a 9th
//!
//! sus2 and sus4 are mutually exclusive: turning one on turns the other off.
//!
//! ## Example
//! ```rust
//! use fretboard::{resolve, ChordQuality, Extensions};
//!
//! let formula = resolve(ChordQuality::Maj7, Extensions::none().with_add9());
//! assert_eq!(formula.intervals(), &[0, 4, 7, 11, 14]);
//!
//! let sus = resolve(ChordQuality::Dom9, Extensions::none().with_sus4());
//! assert_eq!(sus.intervals(), &[0, 5, 7]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FretboardError;
use crate::notes::{note_name, PitchClassSet};

/// Interval used to mark an added or extended 9th.
pub const NINTH: u8 = 14;
/// Interval used to mark an 11th.
pub const ELEVENTH: u8 = 17;
/// Interval used to mark a 13th.
pub const THIRTEENTH: u8 = 21;

const SUS2_FORMULA: [u8; 3] = [0, 2, 7];
const SUS4_FORMULA: [u8; 3] = [0, 5, 7];

/// Supported chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChordQuality {
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "min")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "7")]
    Dom7,
    #[serde(rename = "maj7")]
    Maj7,
    #[serde(rename = "min7")]
    Min7,
    #[serde(rename = "dim7")]
    Dim7,
    #[serde(rename = "m7b5")]
    HalfDim7,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "min6")]
    Min6,
    #[serde(rename = "9")]
    Dom9,
    #[serde(rename = "maj9")]
    Maj9,
    #[serde(rename = "min9")]
    Min9,
    #[serde(rename = "11")]
    Dom11,
    #[serde(rename = "13")]
    Dom13,
}

impl ChordQuality {
    /// Every quality, in the order a picker would list them.
    pub const ALL: [ChordQuality; 16] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Dom7,
        ChordQuality::Maj7,
        ChordQuality::Min7,
        ChordQuality::Dim7,
        ChordQuality::HalfDim7,
        ChordQuality::Sixth,
        ChordQuality::Min6,
        ChordQuality::Dom9,
        ChordQuality::Maj9,
        ChordQuality::Min9,
        ChordQuality::Dom11,
        ChordQuality::Dom13,
    ];

    /// The short identifier used in chord titles and request files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Dom7 => "7",
            ChordQuality::Maj7 => "maj7",
            ChordQuality::Min7 => "min7",
            ChordQuality::Dim7 => "dim7",
            ChordQuality::HalfDim7 => "m7b5",
            ChordQuality::Sixth => "6",
            ChordQuality::Min6 => "min6",
            ChordQuality::Dom9 => "9",
            ChordQuality::Maj9 => "maj9",
            ChordQuality::Min9 => "min9",
            ChordQuality::Dom11 => "11",
            ChordQuality::Dom13 => "13",
        }
    }

    /// Base formula before extensions.
    pub fn formula(&self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Dom7 => &[0, 4, 7, 10],
            ChordQuality::Maj7 => &[0, 4, 7, 11],
            ChordQuality::Min7 => &[0, 3, 7, 10],
            ChordQuality::Dim7 => &[0, 3, 6, 9],
            ChordQuality::HalfDim7 => &[0, 3, 6, 10],
            ChordQuality::Sixth => &[0, 4, 7, 9],
            ChordQuality::Min6 => &[0, 3, 7, 9],
            ChordQuality::Dom9 => &[0, 4, 7, 10, NINTH],
            ChordQuality::Maj9 => &[0, 4, 7, 11, NINTH],
            ChordQuality::Min9 => &[0, 3, 7, 10, NINTH],
            ChordQuality::Dom11 => &[0, 4, 7, 10, NINTH, ELEVENTH],
            ChordQuality::Dom13 => &[0, 4, 7, 10, NINTH, THIRTEENTH],
        }
    }
}

impl FromStr for ChordQuality {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ChordQuality::ALL
            .iter()
            .copied()
            .find(|q| q.as_str() == trimmed)
            .ok_or_else(|| FretboardError::UnknownQuality(trimmed.to_string()))
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Extension toggles layered on top of a chord quality.
///
/// sus2 and sus4 can never both be on; the setters clear the other flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extensions {
    sus2: bool,
    sus4: bool,
    add9: bool,
}

impl Extensions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_sus2(mut self) -> Self {
        self.set_sus2(true);
        self
    }

    pub fn with_sus4(mut self) -> Self {
        self.set_sus4(true);
        self
    }

    pub fn with_add9(mut self) -> Self {
        self.add9 = true;
        self
    }

    pub fn set_sus2(&mut self, on: bool) {
        self.sus2 = on;
        if on {
            self.sus4 = false;
        }
    }

    pub fn set_sus4(&mut self, on: bool) {
        self.sus4 = on;
        if on {
            self.sus2 = false;
        }
    }

    pub fn set_add9(&mut self, on: bool) {
        self.add9 = on;
    }

    pub fn sus2(&self) -> bool {
        self.sus2
    }

    pub fn sus4(&self) -> bool {
        self.sus4
    }

    pub fn add9(&self) -> bool {
        self.add9
    }

    /// Title suffix such as `" sus2 add9"`, or empty when nothing is on.
    pub fn suffix(&self) -> String {
        let mut parts = Vec::new();
        if self.sus2 {
            parts.push("sus2");
        }
        if self.sus4 {
            parts.push("sus4");
        }
        if self.add9 {
            parts.push("add9");
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!(" {}", parts.join(" "))
        }
    }
}

/// Chord tones relative to the root, in formula order and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntervalFormula(Vec<u8>);

impl IntervalFormula {
    /// Build a formula, dropping repeated intervals (first occurrence wins).
    pub fn new(intervals: &[u8]) -> Self {
        let mut out: Vec<u8> = Vec::with_capacity(intervals.len());
        for &iv in intervals {
            if !out.contains(&iv) {
                out.push(iv);
            }
        }
        Self(out)
    }

    pub fn intervals(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, interval: u8) -> bool {
        self.0.contains(&interval)
    }

    /// Absolute pitch classes this formula requires over `root`.
    pub fn pitch_classes(&self, root: u8) -> PitchClassSet {
        self.0.iter().map(|iv| (root % 12 + iv % 12) % 12).collect()
    }
}

/// Apply extension toggles to an arbitrary formula.
///
/// A sus flag discards the incoming formula entirely. add9 only appends
/// [`NINTH`] when it is missing, so applying it twice is the same as once.
pub fn apply_extensions(formula: &IntervalFormula, ext: Extensions) -> IntervalFormula {
    if ext.sus2 {
        return IntervalFormula::new(&SUS2_FORMULA);
    }
    if ext.sus4 {
        return IntervalFormula::new(&SUS4_FORMULA);
    }
    let mut out = formula.clone();
    if ext.add9 && !out.contains(NINTH) {
        out.0.push(NINTH);
    }
    out
}

/// Resolve a quality and its extensions to an interval formula.
pub fn resolve(quality: ChordQuality, ext: Extensions) -> IntervalFormula {
    apply_extensions(&IntervalFormula::new(quality.formula()), ext)
}

/// A complete chord selection: root, quality and extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub root: u8,
    pub quality: ChordQuality,
    pub extensions: Extensions,
}

impl Chord {
    pub fn new(root: u8, quality: ChordQuality, extensions: Extensions) -> Self {
        Self {
            root: root % 12,
            quality,
            extensions,
        }
    }

    pub fn formula(&self) -> IntervalFormula {
        resolve(self.quality, self.extensions)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}",
            note_name(self.root),
            self.quality,
            self.extensions.suffix()
        )
    }
}
