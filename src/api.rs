//! # Public API
//!
//! Entry points that go from a chord selection straight to ranked voicings.
//!
//! - [`voicings_for()`] - generate for a validated [`ChordRequest`]
//! - [`voicings_from_yaml()`] - parse a YAML request, then generate
//!
//! Lower-level pieces ([`resolve`](crate::resolve), [`generate`](crate::generate),
//! [`chord_info`](crate::chord_info)) are re-exported from the crate root for
//! callers that manage their own options.
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretboard::voicings_from_yaml;
//!
//! let source = r#"
//! root: G
//! quality: "7"
//! position: 3
//! position-width: 2
//! "#;
//!
//! let voicings = voicings_from_yaml(source)?;
//! for v in voicings.iter().take(3) {
//!     println!("{} ({})", v, v.inversion);
//! }
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use crate::{generate, ChordRequest, FretboardError, Voicing};

/// Generate ranked voicings for a validated request.
///
/// # Example
/// ```rust
/// use fretboard::{voicings_for, Chord, ChordQuality, ChordRequest, Extensions};
///
/// let request = ChordRequest::new(Chord::new(0, ChordQuality::Major, Extensions::none()));
/// let voicings = voicings_for(&request);
/// assert!(voicings.iter().any(|v| v.to_string() == "x32010"));
/// ```
pub fn voicings_for(request: &ChordRequest) -> Vec<Voicing> {
    generate(
        &request.tuning,
        request.chord.root,
        &request.chord.formula(),
        &request.options,
    )
}

/// Parse a YAML chord request and generate its voicings.
///
/// # Errors
/// Returns [`FretboardError`] if the request is malformed. An empty list is
/// returned, not an error, when no voicing fits the constraints.
pub fn voicings_from_yaml(source: &str) -> Result<Vec<Voicing>, FretboardError> {
    let request = ChordRequest::from_yaml(source)?;
    Ok(voicings_for(&request))
}
