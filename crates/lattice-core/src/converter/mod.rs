//! Kana-to-kanji conversion via an N-best lattice that survives edits.
//!
//! `build_lattice` constructs the lattice for an input from scratch.
//! `rebuild_lattice` takes the table of the previous input plus the edit
//! delta and recomputes only what the edit touched. Both return a `Lattice`
//! whose terminal node holds the ranked interpretations.

mod cold;
mod incremental;
mod lattice;
pub mod nbest;
mod propagate;
#[cfg(test)]
pub(crate) mod testutil;


use crate::dict::LatticeDictionary;
use crate::settings::{settings, Settings};

pub use cold::build_lattice;
pub use incremental::rebuild_lattice;
pub use lattice::{
    Candidate, ConvertedSegment, EosNode, Lattice, LatticeNode, Morpheme, NodeId, NodeTable,
    Origin, PathLink, Score,
};

/// Parameters shared by every build of one composing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeOptions {
    /// Paths kept per node and at the terminal node.
    pub n_best: usize,
    /// Reserved class id standing in for the sentence start when scoring
    /// nodes at position 0.
    pub bos_class_id: u16,
    /// Passed through to dictionary lookups.
    pub typo_correction: bool,
}

impl LatticeOptions {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            n_best: s.lattice.nbest,
            bos_class_id: s.lattice.bos_class_id,
            typo_correction: s.lattice.typo_correction,
        }
    }

    pub fn with_n_best(mut self, n_best: usize) -> Self {
        self.n_best = n_best;
        self
    }
}

impl Default for LatticeOptions {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

/// How the input changed at its tail between two builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditDelta {
    /// Positions removed from the end of the previous input.
    pub deleted: usize,
    /// Positions appended after the surviving prefix.
    pub added: usize,
}

impl EditDelta {
    pub fn new(deleted: usize, added: usize) -> Self {
        Self { deleted, added }
    }

    /// Delta that turns `previous` into `current`, keeping their longest
    /// common prefix.
    pub fn between(previous: &[char], current: &[char]) -> Self {
        let common = previous
            .iter()
            .zip(current)
            .take_while(|(a, b)| a == b)
            .count();
        Self {
            deleted: previous.len() - common,
            added: current.len() - common,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deleted == 0 && self.added == 0
    }
}

/// Convert a kana string to its N-best interpretations with a cold build.
pub fn convert_nbest(dict: &dyn LatticeDictionary, kana: &str, n: usize) -> Vec<Candidate> {
    if kana.is_empty() || n == 0 {
        return Vec::new();
    }
    let input: Vec<char> = kana.chars().collect();
    let options = LatticeOptions::default().with_n_best(n);
    build_lattice(dict, &input, &options).candidates()
}

/// Convert a kana string to its best interpretation.
pub fn convert(dict: &dyn LatticeDictionary, kana: &str) -> Vec<ConvertedSegment> {
    convert_nbest(dict, kana, 1)
        .into_iter()
        .next()
        .map(|c| c.segments)
        .unwrap_or_default()
}
