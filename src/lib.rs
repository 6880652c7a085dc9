pub mod api;
pub mod browser;
pub mod chord_info;
pub mod chords;
pub mod error;
pub mod generator;
pub mod notes;
pub mod request;
pub mod tuning;
pub mod voicing;

pub use api::{voicings_for, voicings_from_yaml};
pub use browser::VoicingBrowser;
pub use chord_info::{chord_info, degree_label, ChordToneRow};
pub use chords::{apply_extensions, resolve, Chord, ChordQuality, Extensions, IntervalFormula};
pub use error::*;
pub use generator::{generate, generate_with_stats, ranking_score, GenerateOptions, SearchStats};
pub use request::ChordRequest;
pub use tuning::{Tuning, STRING_COUNT};
pub use voicing::{playability_score, Inversion, StringState, Voicing};
