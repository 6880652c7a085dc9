//! Stepping through a ranked voicing list.
//!
//! A browser is built once per generation. Changing the chord means building a
//! new browser, which starts again at the first voicing.

use crate::voicing::Voicing;

#[derive(Debug, Clone, Default)]
pub struct VoicingBrowser {
    voicings: Vec<Voicing>,
    index: usize,
}

impl VoicingBrowser {
    pub fn new(voicings: Vec<Voicing>) -> Self {
        Self { voicings, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.voicings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voicings.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Voicing> {
        self.voicings.get(self.index)
    }

    pub fn voicings(&self) -> &[Voicing] {
        &self.voicings
    }

    /// Move to the next voicing, wrapping to the first.
    pub fn next_voicing(&mut self) -> Option<&Voicing> {
        self.step(1)
    }

    /// Move to the previous voicing, wrapping to the last.
    pub fn prev_voicing(&mut self) -> Option<&Voicing> {
        self.step(-1)
    }

    fn step(&mut self, dir: isize) -> Option<&Voicing> {
        if self.is_empty() {
            return None;
        }
        let len = self.len() as isize;
        self.index = ((self.index as isize + dir).rem_euclid(len)) as usize;
        self.current()
    }

    /// Status line for the current voicing, or the "nothing found" hint.
    pub fn summary(&self) -> String {
        match self.current() {
            Some(v) => format!(
                "Voicing: {}/{} — inversion: {}, anchor: {}",
                self.index + 1,
                self.len(),
                v.inversion,
                v.anchor.map_or_else(|| "-".to_string(), |a| a.to_string())
            ),
            None => "No voicing found (try expanding the position).".to_string(),
        }
    }
}
