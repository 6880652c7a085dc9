//! Property-based tests for the voicing generator using proptest.
//!
//! These check the guarantees every generated voicing must meet, for arbitrary
//! roots, qualities and extension toggles.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test proptest_voicings
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use fretboard::notes::PitchClassSet;
use fretboard::{
    apply_extensions, generate, resolve, ChordQuality, Extensions, GenerateOptions, IntervalFormula,
    Tuning,
};

fn quality() -> impl Strategy<Value = ChordQuality> {
    prop::sample::select(ChordQuality::ALL.to_vec())
}

fn extensions() -> impl Strategy<Value = Extensions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(sus2, sus4, add9)| {
        let mut ext = Extensions::none();
        ext.set_sus2(sus2);
        ext.set_sus4(sus4);
        ext.set_add9(add9);
        ext
    })
}

fn options() -> impl Strategy<Value = GenerateOptions> {
    (
        2u8..=7,
        any::<bool>(),
        prop::option::of(1u8..=12),
        1u8..=4,
    )
        .prop_map(|(max_span, allow_open_strings, preferred_position, position_width)| {
            GenerateOptions {
                max_span,
                allow_open_strings,
                fret_window: (0, 12),
                preferred_position,
                position_width,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every voicing sounds every required pitch class, respects the span
    /// limit and has at least one sounding string.
    #[test]
    fn voicings_cover_chord_within_span(
        root in 0u8..12,
        quality in quality(),
        ext in extensions(),
        options in options(),
    ) {
        let tuning = Tuning::standard();
        let formula = resolve(quality, ext);
        let target = formula.pitch_classes(root);

        for v in generate(&tuning, root, &formula, &options) {
            prop_assert!(v.span <= options.max_span, "{} exceeds span {}", v, options.max_span);
            prop_assert!(v.sounding_count() > 0);

            let sounding: PitchClassSet = v
                .strings
                .iter()
                .enumerate()
                .filter_map(|(i, s)| s.fret().map(|f| tuning.pitch_class_at(i, f)))
                .collect();
            prop_assert!(sounding.is_superset(&target), "{} misses a chord tone", v);

            if !options.allow_open_strings {
                prop_assert!(v.strings.iter().all(|s| s.fret() != Some(0)));
            }
        }
    }

    /// No two voicings share the same string assignment.
    #[test]
    fn voicings_are_unique(root in 0u8..12, quality in quality()) {
        let formula = resolve(quality, Extensions::none());
        let voicings = generate(&Tuning::standard(), root, &formula, &GenerateOptions::default());

        let mut seen = HashSet::new();
        for v in &voicings {
            prop_assert!(seen.insert(v.strings.clone()), "duplicate {}", v);
        }
    }

    /// With a preferred position every voicing passes both position filters.
    #[test]
    fn voicings_respect_position(
        root in 0u8..12,
        quality in quality(),
        position in 1u8..=12,
        width in 1u8..=4,
    ) {
        let options = GenerateOptions {
            preferred_position: Some(position),
            position_width: width,
            ..Default::default()
        };
        let formula = resolve(quality, Extensions::none());

        for v in generate(&Tuning::standard(), root, &formula, &options) {
            let (lo, hi) = v.fretted_range;
            prop_assert!(v.is_all_open() || (lo >= position && hi <= position + 4));
            let anchor = v.effective_anchor() as i32;
            prop_assert!((anchor - position as i32).abs() <= width as i32);
        }
    }

    /// add9 applied twice equals add9 applied once.
    #[test]
    fn add9_is_idempotent(quality in quality(), ext in extensions()) {
        let add9 = Extensions::none().with_add9();
        let once = apply_extensions(&resolve(quality, ext), add9);
        let twice = apply_extensions(&once, add9);
        prop_assert_eq!(once, twice);
    }

    /// Formulas never repeat an interval.
    #[test]
    fn formulas_have_no_duplicates(quality in quality(), ext in extensions()) {
        let formula: IntervalFormula = resolve(quality, ext);
        let unique: HashSet<u8> = formula.intervals().iter().copied().collect();
        prop_assert_eq!(unique.len(), formula.intervals().len());
    }
}
