use serde::Serialize;

use super::nbest::Ranked;
use crate::dict::DictEntry;

/// Additive path score. Higher is better.
pub type Score = i32;

/// Morpheme data attached to a lattice node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Kana substring (reading)
    pub reading: String,
    /// Surface form (kanji, etc.)
    pub surface: String,
    /// Left connection class
    pub left_id: u16,
    /// Right connection class
    pub right_id: u16,
    /// Word cost (lower = more preferred)
    pub cost: i16,
}

impl Morpheme {
    pub fn from_entry(reading: &str, entry: &DictEntry) -> Self {
        Self {
            reading: reading.to_string(),
            surface: entry.surface.clone(),
            left_id: entry.left_id,
            right_id: entry.right_id,
            cost: entry.cost,
        }
    }
}

/// Locator of a node inside a `NodeTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub position: usize,
    pub slot: usize,
}

/// Where a path continues from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Beginning of sentence.
    Bos,
    /// Path `rank` of the node at `node`.
    Node { node: NodeId, rank: usize },
}

/// A realized path: the predecessor it extends plus its cumulative score.
///
/// Links always point at strictly earlier positions, so following them
/// terminates at `Origin::Bos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLink {
    pub origin: Origin,
    pub total: Score,
}

impl Ranked for PathLink {
    fn score(&self) -> Score {
        self.total
    }
}

/// A dictionary match covering `[start, end)` of the input.
///
/// `prevs` holds the best incoming paths (score-descending, at most N-best).
/// `values[i]` is `prevs[i].total` plus the node's own base score; it is
/// what successors extend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeNode {
    pub morpheme: Morpheme,
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    pub(crate) prevs: Vec<PathLink>,
    pub(crate) values: Vec<Score>,
}

impl LatticeNode {
    pub fn new(morpheme: Morpheme, start: usize, end: usize) -> Self {
        Self {
            morpheme,
            start,
            end,
            prevs: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn prevs(&self) -> &[PathLink] {
        &self.prevs
    }

    pub fn values(&self) -> &[Score] {
        &self.values
    }

    /// Whether at least one path reaches this node.
    pub fn is_reachable(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Terminal (EOS) node. Its paths are the finished interpretations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EosNode {
    pub(crate) prevs: Vec<PathLink>,
}

impl EosNode {
    pub fn prevs(&self) -> &[PathLink] {
        &self.prevs
    }

    /// True when no path covers the whole input ("no conversion available").
    pub fn is_empty(&self) -> bool {
        self.prevs.is_empty()
    }
}

/// Lattice nodes grouped by start position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTable {
    pub(crate) positions: Vec<Vec<LatticeNode>>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of position lists.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Nodes starting at `position` (empty past the end).
    pub fn at(&self, position: usize) -> &[LatticeNode] {
        self.positions
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get(&self, id: NodeId) -> Option<&LatticeNode> {
        self.positions.get(id.position)?.get(id.slot)
    }

    pub fn positions(&self) -> impl Iterator<Item = &[LatticeNode]> {
        self.positions.iter().map(Vec::as_slice)
    }

    /// All nodes with their locators, by position then slot.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &LatticeNode)> {
        self.positions.iter().enumerate().flat_map(|(position, nodes)| {
            nodes
                .iter()
                .enumerate()
                .map(move |(slot, node)| (NodeId { position, slot }, node))
        })
    }

    pub fn node_count(&self) -> usize {
        self.positions.iter().map(Vec::len).sum()
    }

    /// Keep what is still valid when only the first `common` positions of the
    /// input survive an edit.
    ///
    /// Drops position lists at or beyond `common`, drops nodes reaching past
    /// `common`, then removes trailing empty lists. Applying it twice with the
    /// same `common` changes nothing.
    pub fn retain_prefix(mut self, common: usize) -> Self {
        self.positions.truncate(common);
        for nodes in &mut self.positions {
            debug_assert!(
                nodes.windows(2).all(|w| w[0].end <= w[1].end),
                "position lists must be ordered by end"
            );
            nodes.retain(|node| node.end <= common);
        }
        while self.positions.last().is_some_and(Vec::is_empty) {
            self.positions.pop();
        }
        self
    }

    /// Pad with empty lists (or truncate) to exactly `len` positions.
    pub(crate) fn resize(&mut self, len: usize) {
        self.positions.resize_with(len, Vec::new);
    }
}

/// A segment in a conversion result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedSegment {
    /// The kana reading of this segment
    pub reading: String,
    /// The converted surface form (kanji, etc.)
    pub surface: String,
}

/// One complete interpretation of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub segments: Vec<ConvertedSegment>,
    pub score: Score,
}

impl Candidate {
    /// Concatenated surface string.
    pub fn surface(&self) -> String {
        self.segments.iter().map(|s| s.surface.as_str()).collect()
    }
}

/// The result of a build: the node table to keep for the next edit and the
/// terminal node holding the ranked interpretations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lattice {
    pub table: NodeTable,
    pub eos: EosNode,
}

impl Lattice {
    /// Node locators of the path ending in `link`, BOS side first.
    pub fn trace(&self, link: &PathLink) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut origin = link.origin;
        while let Origin::Node { node, rank } = origin {
            ids.push(node);
            match self.table.get(node).and_then(|n| n.prevs.get(rank)) {
                Some(prev) => origin = prev.origin,
                None => break,
            }
        }
        ids.reverse();
        ids
    }

    /// All terminal paths as segment lists, best first.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.eos
            .prevs
            .iter()
            .map(|link| Candidate {
                segments: self
                    .trace(link)
                    .into_iter()
                    .filter_map(|id| self.table.get(id))
                    .map(|node| ConvertedSegment {
                        reading: node.morpheme.reading.clone(),
                        surface: node.morpheme.surface.clone(),
                    })
                    .collect(),
                score: link.total,
            })
            .collect()
    }

    /// The highest-scoring interpretation, if any path reaches the end.
    pub fn best(&self) -> Option<Candidate> {
        self.candidates().into_iter().next()
    }
}
