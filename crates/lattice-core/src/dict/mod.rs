//! Dictionary and connection-matrix adapters consumed by the lattice builders.
//!
//! `LatticeDictionary` is the read-only seam between the converter and the
//! lexicon/language model. `MemoryDictionary` is the in-process
//! implementation backed by a reading → entries map and an optional
//! `ConnectionMatrix`.

pub mod connection;
mod connection_io;
mod entry;
mod memory;
mod source;
#[cfg(test)]
mod tests;

pub use entry::DictEntry;
pub use memory::MemoryDictionary;

use std::io;
use std::ops::Range;

use crate::converter::{LatticeNode, Morpheme, Score};

/// Error type for loading lexicon and connection-matrix text.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

/// Read-side contract of the dictionary / language model.
///
/// Implementations must be safe to share between composing sessions; every
/// method takes `&self` and nothing here mutates the dictionary.
pub trait LatticeDictionary: Send + Sync {
    /// All matches starting at `start` whose exclusive end lies in `ends`.
    ///
    /// `ends` is clamped by callers to `start + 1..=input.len()`. The returned
    /// nodes carry no paths yet. `typo_correction` allows the implementation
    /// to add corrected matches; it never changes the range contract.
    fn matches(
        &self,
        input: &[char],
        start: usize,
        ends: Range<usize>,
        typo_correction: bool,
    ) -> Vec<LatticeNode>;

    /// Removal policy: excluded morphemes never take part in a path.
    fn is_excluded(&self, morpheme: &Morpheme) -> bool;

    /// Score of connecting a left morpheme's right class to a right
    /// morpheme's left class.
    fn connection_cost(&self, right_id: u16, left_id: u16) -> Score;

    /// Unigram score of a single morpheme.
    fn base_score(&self, morpheme: &Morpheme) -> Score;
}
