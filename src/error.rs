//! # Error Types
//!
//! Errors raised at the validated boundary of the crate: parsing note names,
//! chord qualities, tunings and YAML chord requests.
//!
//! The resolver and the voicing generator are total over validated inputs and
//! never fail. An empty voicing list is a normal result ("no voicing found"),
//! not an error.
//!
//! ## Usage
//! ```rust
//! use fretboard::{voicings_from_yaml, FretboardError};
//!
//! match voicings_from_yaml("root: H\n") {
//!     Ok(voicings) => println!("{} voicings", voicings.len()),
//!     Err(FretboardError::InvalidNote(name)) => eprintln!("bad root: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FretboardError {
    /// A note name that is not one of `C C# D D# E F F# G G# A A# B`
    /// (flat spellings such as `Bb` are accepted too).
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidNote("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: H");
    /// ```
    #[error("Invalid note name: {0}")]
    InvalidNote(String),

    /// A chord quality identifier outside the supported set.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnknownQuality("7#9".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord quality: 7#9");
    /// ```
    #[error("Unknown chord quality: {0}")]
    UnknownQuality(String),

    /// A tuning with the wrong string count or an out-of-range pitch.
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    /// Generator options that cannot describe a fret range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A chord request document that is not valid YAML or has the wrong shape.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::Config("missing field `root`".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord request: missing field `root`");
    /// ```
    #[error("Invalid chord request: {0}")]
    Config(String),
}
