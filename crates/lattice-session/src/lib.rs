//! Composing session that keeps the lattice of the current input alive
//! across edits.
//!
//! `ComposingSession` owns the current kana input and the lattice built for
//! it. Every edit is turned into an exact `EditDelta` and handed to
//! `rebuild_lattice`, so only the part of the lattice touched by the edit is
//! recomputed.

mod editing;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use lattice_core::converter::{Candidate, EditDelta, Lattice, LatticeOptions};
use lattice_core::dict::LatticeDictionary;

/// Inputs longer than this are cut; the lattice cost grows with length.
pub const MAX_INPUT_LENGTH: usize = 100;

pub struct ComposingSession {
    dict: Arc<dyn LatticeDictionary>,
    options: LatticeOptions,

    input: Vec<char>,
    lattice: Lattice,
    last_delta: EditDelta,
}

impl ComposingSession {
    /// Session with options taken from the global settings.
    pub fn new(dict: Arc<dyn LatticeDictionary>) -> Self {
        Self::with_options(dict, LatticeOptions::default())
    }

    pub fn with_options(dict: Arc<dyn LatticeDictionary>, options: LatticeOptions) -> Self {
        Self {
            dict,
            options,
            input: Vec::new(),
            lattice: Lattice::default(),
            last_delta: EditDelta::default(),
        }
    }

    pub fn options(&self) -> &LatticeOptions {
        &self.options
    }

    /// Current kana input.
    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Lattice of the current input.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Delta applied by the most recent edit.
    pub fn last_delta(&self) -> EditDelta {
        self.last_delta
    }

    /// Up to `limit` interpretations of the current input, best first.
    pub fn candidates(&self, limit: usize) -> Vec<Candidate> {
        let mut candidates = self.lattice.candidates();
        candidates.truncate(limit);
        candidates
    }
}
