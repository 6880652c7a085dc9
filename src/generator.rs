//! # Voicing Generator
//!
//! Enumerates every fingering of a chord on a tuning, then filters and ranks
//! them.
//!
//! ## Pipeline
//! 1. Reduce the interval formula to the absolute pitch classes it requires
//! 2. For each string, list the frets inside the window (and the position box)
//!    that sound one of those pitch classes. A string with no such fret can
//!    only be muted.
//! 3. Depth-first search over strings, low to high: try every candidate fret,
//!    then mute. A branch is pruned as soon as its fretted span exceeds
//!    `max_span`.
//! 4. At each complete assignment, keep it if something sounds, the span fits
//!    and every required pitch class is present (extra or doubled tones are fine)
//! 5. Deduplicate, apply the two position filters, score and stable-sort
//!
//! ## Position filters
//! With a preferred position `p` a voicing has to pass both:
//! - **Box**: fretted range inside `[p, p + BOX_WIDTH]`; all-open voicings pass
//! - **Anchor**: effective anchor inside `[p - position_width, p + position_width]`
//!
//! The two checks have different bounds and are applied independently.
//!
//! ## Example
//! ```rust
//! use fretboard::{generate, resolve, ChordQuality, Extensions, GenerateOptions, Tuning};
//!
//! let formula = resolve(ChordQuality::Major, Extensions::none());
//! let voicings = generate(&Tuning::standard(), 0, &formula, &GenerateOptions::default());
//!
//! assert!(voicings.iter().any(|v| v.to_string() == "x32010"));
//! ```

use std::collections::HashSet;

use crate::chords::IntervalFormula;
use crate::error::FretboardError;
use crate::notes::PitchClassSet;
use crate::tuning::{Tuning, MAX_FRET};
use crate::voicing::{playability_score, position_penalty, StringState, Voicing};

/// Width of the position box used when filtering finished voicings.
pub const BOX_WIDTH: u8 = 4;

/// Highest neck position a caller may prefer.
pub const MAX_POSITION: u8 = 12;

/// Search and ranking options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Largest allowed distance between fretted strings.
    pub max_span: u8,
    /// Whether open strings (fret 0) may be used.
    pub allow_open_strings: bool,
    /// Inclusive fret range to search; the upper bound is capped at [`MAX_FRET`].
    pub fret_window: (u8, u8),
    /// Preferred neck position (1..=12). `None` (or 0) means no preference.
    pub preferred_position: Option<u8>,
    /// Tolerance around the preferred position.
    pub position_width: u8,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_span: 7,
            allow_open_strings: true,
            fret_window: (0, 12),
            preferred_position: None,
            position_width: 4,
        }
    }
}

impl GenerateOptions {
    /// Check that the options describe a searchable fret range.
    pub fn validate(&self) -> Result<(), FretboardError> {
        let (lo, hi) = self.fret_window;
        if lo > hi {
            return Err(FretboardError::InvalidOptions(format!(
                "fret window [{}, {}] is empty",
                lo, hi
            )));
        }
        if lo > MAX_FRET {
            return Err(FretboardError::InvalidOptions(format!(
                "fret window starts above fret {}",
                MAX_FRET
            )));
        }
        if let Some(p) = self.preferred_position {
            if !(1..=MAX_POSITION).contains(&p) {
                return Err(FretboardError::InvalidOptions(format!(
                    "position {} is outside 1..={}",
                    p, MAX_POSITION
                )));
            }
        }
        Ok(())
    }

    fn position(&self) -> Option<u8> {
        self.preferred_position.filter(|&p| p > 0)
    }
}

/// Counters collected during one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: usize,
    pub branches_pruned: usize,
    pub leaves: usize,
    pub accepted: usize,
    pub duplicates: usize,
    pub dropped_by_box: usize,
    pub dropped_by_anchor: usize,
}

/// Generate ranked voicings for `formula` over `root` on `tuning`.
///
/// An empty result means nothing satisfies the constraints.
pub fn generate(
    tuning: &Tuning,
    root: u8,
    formula: &IntervalFormula,
    options: &GenerateOptions,
) -> Vec<Voicing> {
    generate_with_stats(tuning, root, formula, options).0
}

/// Same as [`generate`], also returning search counters.
pub fn generate_with_stats(
    tuning: &Tuning,
    root: u8,
    formula: &IntervalFormula,
    options: &GenerateOptions,
) -> (Vec<Voicing>, SearchStats) {
    let root = root % 12;
    let (unique, mut stats) = discover(tuning, root, formula, options);

    let position = options.position();
    let kept: Vec<Voicing> = match position {
        None => unique,
        Some(p) => unique
            .into_iter()
            .filter(|v| {
                if !in_position_box(v, p) {
                    stats.dropped_by_box += 1;
                    return false;
                }
                if !anchor_near_position(v, p, options.position_width) {
                    stats.dropped_by_anchor += 1;
                    return false;
                }
                true
            })
            .collect(),
    };

    let mut scored: Vec<(Voicing, f64)> = kept
        .into_iter()
        .map(|v| {
            let score = ranking_score(&v, root, tuning, position);
            (v, score)
        })
        .collect();
    // sort_by is stable: equal scores keep discovery order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    (scored.into_iter().map(|(v, _)| v).collect(), stats)
}

/// Full ranking score: playability minus the distance penalty when a
/// position is preferred.
pub fn ranking_score(voicing: &Voicing, root: u8, tuning: &Tuning, position: Option<u8>) -> f64 {
    let base = playability_score(voicing, root, tuning);
    match position.filter(|&p| p > 0) {
        Some(p) => base - position_penalty(voicing, p),
        None => base,
    }
}

/// Every distinct voicing in the order the search reaches it, before the
/// position filters and ranking.
fn discover(
    tuning: &Tuning,
    root: u8,
    formula: &IntervalFormula,
    options: &GenerateOptions,
) -> (Vec<Voicing>, SearchStats) {
    let target = formula.pitch_classes(root);
    let choices: Vec<Vec<u8>> = (0..tuning.len())
        .map(|string| candidate_frets(tuning, string, &target, options))
        .collect();

    let mut search = Search {
        tuning,
        root,
        target,
        choices: &choices,
        max_span: options.max_span,
        found: Vec::new(),
        stats: SearchStats::default(),
    };
    let mut acc = Vec::with_capacity(tuning.len());
    search.backtrack(&mut acc, None);

    let Search { found, mut stats, .. } = search;

    let mut seen: HashSet<Vec<StringState>> = HashSet::new();
    let mut unique = Vec::with_capacity(found.len());
    for voicing in found {
        if seen.insert(voicing.strings.clone()) {
            unique.push(voicing);
        } else {
            stats.duplicates += 1;
        }
    }
    (unique, stats)
}

/// Frets on `string` that sound a target pitch class, ascending.
fn candidate_frets(
    tuning: &Tuning,
    string: usize,
    target: &PitchClassSet,
    options: &GenerateOptions,
) -> Vec<u8> {
    let (lo, hi) = options.fret_window;
    let position = options.position();

    (lo..=hi.min(MAX_FRET))
        .filter(|&fret| options.allow_open_strings || fret > 0)
        .filter(|&fret| match position {
            // Open strings are playable from any position
            Some(p) if fret > 0 => {
                fret >= p && fret as u16 <= p as u16 + options.position_width as u16
            }
            _ => true,
        })
        .filter(|&fret| target.contains(tuning.pitch_class_at(string, fret)))
        .collect()
}

fn in_position_box(voicing: &Voicing, position: u8) -> bool {
    if voicing.is_all_open() {
        return true;
    }
    let (lo, hi) = voicing.fretted_range;
    lo >= position && hi as u16 <= position as u16 + BOX_WIDTH as u16
}

fn anchor_near_position(voicing: &Voicing, position: u8, width: u8) -> bool {
    let anchor = voicing.effective_anchor() as i32;
    let (p, w) = (position as i32, width as i32);
    anchor >= p - w && anchor <= p + w
}

struct Search<'a> {
    tuning: &'a Tuning,
    root: u8,
    target: PitchClassSet,
    choices: &'a [Vec<u8>],
    max_span: u8,
    found: Vec<Voicing>,
    stats: SearchStats,
}

impl Search<'_> {
    /// Assign string `acc.len()` and recurse. `range` is the running
    /// (min, max) of fretted positions so far.
    fn backtrack(&mut self, acc: &mut Vec<StringState>, range: Option<(u8, u8)>) {
        self.stats.nodes_visited += 1;

        let string = acc.len();
        if string == self.tuning.len() {
            self.complete(acc);
            return;
        }

        let choices = self.choices;
        for &fret in &choices[string] {
            let next = if fret == 0 {
                range
            } else {
                let (lo, hi) = range.map_or((fret, fret), |(lo, hi)| (lo.min(fret), hi.max(fret)));
                if hi - lo > self.max_span {
                    self.stats.branches_pruned += 1;
                    continue;
                }
                Some((lo, hi))
            };
            acc.push(StringState::Fret(fret));
            self.backtrack(acc, next);
            acc.pop();
        }

        acc.push(StringState::Muted);
        self.backtrack(acc, range);
        acc.pop();
    }

    fn complete(&mut self, acc: &[StringState]) {
        self.stats.leaves += 1;

        if acc.iter().all(|s| s.is_muted()) {
            return;
        }

        let sounding: PitchClassSet = acc
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.fret().map(|f| self.tuning.pitch_class_at(i, f)))
            .collect();
        if !sounding.is_superset(&self.target) {
            return;
        }

        let voicing = Voicing::from_strings(acc.to_vec(), self.root, self.tuning);
        if voicing.span > self.max_span {
            return;
        }

        self.stats.accepted += 1;
        self.found.push(voicing);
    }
}
