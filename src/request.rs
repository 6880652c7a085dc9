//! # Chord Requests
//!
//! A chord request is a small YAML document naming the chord and the search
//! options:
//!
//! ```yaml
//! root: C
//! quality: maj7
//! add9: true
//! position: 8
//! position-width: 2
//! ```
//!
//! | key | default |
//! |-----|---------|
//! | `root` | required |
//! | `quality` | `maj` |
//! | `sus2`, `sus4`, `add9` | `false` |
//! | `allow-open` | `true` |
//! | `max-span` | `7` |
//! | `fret-window` | `[0, 12]` |
//! | `position` | none |
//! | `position-width` | `4` |
//! | `tuning` | `[40, 45, 50, 55, 59, 64]` |
//!
//! When both `sus2` and `sus4` are set, sus4 wins.

use serde::Deserialize;

use crate::chords::{Chord, ChordQuality, Extensions};
use crate::error::FretboardError;
use crate::generator::GenerateOptions;
use crate::notes::parse_note;
use crate::tuning::Tuning;

/// Raw request for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawRequest {
    pub root: String,
    pub quality: Option<QualityName>,
    #[serde(default)]
    pub sus2: bool,
    #[serde(default)]
    pub sus4: bool,
    #[serde(default)]
    pub add9: bool,
    pub allow_open: Option<bool>,
    pub max_span: Option<u8>,
    pub fret_window: Option<(u8, u8)>,
    pub position: Option<u8>,
    pub position_width: Option<u8>,
    pub tuning: Option<Vec<u8>>,
}

/// Quality identifiers like `7` or `13` arrive from YAML as numbers.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum QualityName {
    Text(String),
    Number(u64),
}

/// A validated chord request, ready for generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordRequest {
    pub chord: Chord,
    pub tuning: Tuning,
    pub options: GenerateOptions,
}

impl ChordRequest {
    /// Standard tuning and default options for `chord`.
    pub fn new(chord: Chord) -> Self {
        Self {
            chord,
            tuning: Tuning::standard(),
            options: GenerateOptions::default(),
        }
    }

    /// Parse and validate a YAML request.
    ///
    /// # Example
    /// ```
    /// use fretboard::{ChordQuality, ChordRequest};
    ///
    /// let request = ChordRequest::from_yaml("root: A\nquality: min7\nposition: 5\n")?;
    /// assert_eq!(request.chord.root, 9);
    /// assert_eq!(request.chord.quality, ChordQuality::Min7);
    /// assert_eq!(request.options.preferred_position, Some(5));
    /// # Ok::<(), fretboard::FretboardError>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, FretboardError> {
        let raw: RawRequest =
            serde_yaml::from_str(source).map_err(|e| FretboardError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawRequest) -> Result<Self, FretboardError> {
        let root = parse_note(&raw.root)?;

        let quality = match raw.quality {
            Some(QualityName::Text(q)) => q.parse::<ChordQuality>()?,
            Some(QualityName::Number(n)) => n.to_string().parse::<ChordQuality>()?,
            None => ChordQuality::Major,
        };

        let mut extensions = Extensions::none();
        extensions.set_sus2(raw.sus2);
        extensions.set_sus4(raw.sus4);
        extensions.set_add9(raw.add9);

        let tuning = match raw.tuning {
            Some(pitches) => Tuning::new(pitches)?,
            None => Tuning::standard(),
        };

        let defaults = GenerateOptions::default();
        let options = GenerateOptions {
            max_span: raw.max_span.unwrap_or(defaults.max_span),
            allow_open_strings: raw.allow_open.unwrap_or(defaults.allow_open_strings),
            fret_window: raw.fret_window.unwrap_or(defaults.fret_window),
            preferred_position: raw.position,
            position_width: raw.position_width.unwrap_or(defaults.position_width),
        };
        options.validate()?;

        Ok(Self {
            chord: Chord::new(root, quality, extensions),
            tuning,
            options,
        })
    }
}
