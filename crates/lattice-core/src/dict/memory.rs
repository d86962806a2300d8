use std::collections::{HashMap, HashSet};
use std::ops::Range;

use tracing::trace;

use super::connection::ConnectionMatrix;
use super::{DictEntry, LatticeDictionary};
use crate::converter::{LatticeNode, Morpheme, Score};

/// In-memory lexicon keyed by kana reading.
///
/// Scores are derived from costs by negation, so the cheapest entry has
/// the highest score. Without a connection matrix every transition scores 0
/// (unigram-only conversion).
pub struct MemoryDictionary {
    entries: HashMap<String, Vec<DictEntry>>,
    max_reading_chars: usize,
    conn: Option<ConnectionMatrix>,
    excluded: HashSet<String>,
    unknown_word_cost: Option<i16>,
}

impl MemoryDictionary {
    /// Build from `(reading, entries)` pairs. Entries for the same reading are
    /// merged and kept sorted by cost (stable, so equal costs keep input order).
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<DictEntry>)>) -> Self {
        let mut map: HashMap<String, Vec<DictEntry>> = HashMap::new();
        for (reading, candidates) in entries {
            if reading.is_empty() {
                continue;
            }
            map.entry(reading).or_default().extend(candidates);
        }
        for candidates in map.values_mut() {
            candidates.sort_by_key(|e| e.cost);
        }
        let max_reading_chars = map.keys().map(|r| r.chars().count()).max().unwrap_or(0);
        Self {
            entries: map,
            max_reading_chars,
            conn: None,
            excluded: HashSet::new(),
            unknown_word_cost: None,
        }
    }

    /// Attach a connection matrix used for transition scores.
    pub fn with_connection(mut self, conn: ConnectionMatrix) -> Self {
        self.conn = Some(conn);
        self
    }

    /// Emit a 1-char fallback match (surface = reading) at every position
    /// that has no single-character entry, so the lattice stays connected.
    pub fn with_unknown_fallback(mut self, cost: i16) -> Self {
        self.unknown_word_cost = Some(cost);
        self
    }

    /// Exclude every entry with this surface from conversion.
    pub fn exclude_surface(&mut self, surface: impl Into<String>) {
        self.excluded.insert(surface.into());
    }

    pub fn connection(&self) -> Option<&ConnectionMatrix> {
        self.conn.as_ref()
    }

    /// Exact lookup of a reading.
    pub fn lookup(&self, reading: &str) -> &[DictEntry] {
        self.entries.get(reading).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct readings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LatticeDictionary for MemoryDictionary {
    /// Exact lookup only; `typo_correction` is accepted and ignored.
    fn matches(
        &self,
        input: &[char],
        start: usize,
        ends: Range<usize>,
        _typo_correction: bool,
    ) -> Vec<LatticeNode> {
        let mut nodes = Vec::new();
        if start >= input.len() {
            return nodes;
        }
        let lo = ends.start.max(start + 1);
        let hi = ends
            .end
            .min(input.len() + 1)
            .min(start + self.max_reading_chars + 1);

        let mut has_single_char_match = false;
        let mut reading: String = if lo < hi {
            input[start..lo - 1].iter().collect()
        } else {
            String::new()
        };
        for end in lo..hi {
            reading.push(input[end - 1]);
            for entry in self.lookup(&reading) {
                nodes.push(LatticeNode::new(
                    Morpheme::from_entry(&reading, entry),
                    start,
                    end,
                ));
                if end == start + 1 {
                    has_single_char_match = true;
                }
            }
        }

        if let Some(cost) = self.unknown_word_cost {
            let single_end = start + 1;
            if !has_single_char_match && lo <= single_end && single_end < ends.end {
                let ch = input[start].to_string();
                let fallback = Morpheme {
                    reading: ch.clone(),
                    surface: ch,
                    left_id: 0,
                    right_id: 0,
                    cost,
                };
                // Ends ascend; the fallback has the shortest possible end.
                nodes.insert(0, LatticeNode::new(fallback, start, single_end));
            }
        }

        trace!(start, count = nodes.len(), "dictionary matches");
        nodes
    }

    fn is_excluded(&self, morpheme: &Morpheme) -> bool {
        self.excluded.contains(&morpheme.surface)
    }

    fn connection_cost(&self, right_id: u16, left_id: u16) -> Score {
        self.conn
            .as_ref()
            .map_or(0, |conn| -Score::from(conn.cost(right_id, left_id)))
    }

    fn base_score(&self, morpheme: &Morpheme) -> Score {
        -Score::from(morpheme.cost)
    }
}
