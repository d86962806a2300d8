use crate::converter::{Lattice, LatticeOptions, NodeTable, Origin, PathLink, Score};
use crate::dict::connection::ConnectionMatrix;
use crate::dict::{DictEntry, LatticeDictionary, MemoryDictionary};

pub(crate) const NOUN: u16 = 1;
pub(crate) const PARTICLE: u16 = 2;
pub(crate) const ADJECTIVE: u16 = 3;
pub(crate) const AUX: u16 = 4;

pub(crate) fn entry(surface: &str, cost: i16, id: u16) -> DictEntry {
    DictEntry {
        surface: surface.to_string(),
        cost,
        left_id: id,
        right_id: id,
    }
}

pub(crate) fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

pub(crate) fn options(n_best: usize) -> LatticeOptions {
    LatticeOptions {
        n_best,
        bos_class_id: 0,
        typo_correction: false,
    }
}

pub(crate) fn test_matrix() -> ConnectionMatrix {
    let mut conn = ConnectionMatrix::new(5, Vec::new());
    conn.set(0, NOUN, 100);
    conn.set(0, PARTICLE, 2000);
    conn.set(0, ADJECTIVE, 500);
    conn.set(0, AUX, 1000);
    conn.set(NOUN, NOUN, 1500);
    conn.set(NOUN, PARTICLE, -500);
    conn.set(NOUN, AUX, -200);
    conn.set(PARTICLE, NOUN, 100);
    conn.set(PARTICLE, ADJECTIVE, 200);
    conn.set(ADJECTIVE, NOUN, 300);
    conn
}

pub(crate) fn test_dict() -> MemoryDictionary {
    let entries = vec![
        (
            "きょう".to_string(),
            vec![entry("今日", 3000, NOUN), entry("京", 5000, NOUN)],
        ),
        (
            "き".to_string(),
            vec![entry("木", 4000, NOUN), entry("気", 4200, NOUN)],
        ),
        ("きょ".to_string(), vec![entry("居", 6000, NOUN)]),
        (
            "よう".to_string(),
            vec![entry("用", 4500, NOUN), entry("様", 4600, NOUN)],
        ),
        ("う".to_string(), vec![entry("卯", 7000, NOUN)]),
        (
            "は".to_string(),
            vec![entry("は", 2000, PARTICLE), entry("葉", 4500, NOUN)],
        ),
        ("い".to_string(), vec![entry("胃", 5000, NOUN)]),
        (
            "いい".to_string(),
            vec![entry("良い", 3500, ADJECTIVE), entry("いい", 4000, ADJECTIVE)],
        ),
        (
            "てんき".to_string(),
            vec![entry("天気", 4000, NOUN), entry("転記", 6000, NOUN)],
        ),
        (
            "てん".to_string(),
            vec![entry("点", 4000, NOUN), entry("天", 4500, NOUN)],
        ),
        ("わたし".to_string(), vec![entry("私", 3000, NOUN)]),
        ("がくせい".to_string(), vec![entry("学生", 3500, NOUN)]),
        ("です".to_string(), vec![entry("です", 2500, AUX)]),
        ("で".to_string(), vec![entry("で", 2500, PARTICLE)]),
        ("す".to_string(), vec![entry("酢", 6000, NOUN)]),
    ];
    MemoryDictionary::from_entries(entries)
        .with_connection(test_matrix())
        .with_unknown_fallback(10000)
}

/// Recompute a terminal path's score from its nodes.
pub(crate) fn recomputed_score(
    dict: &dyn LatticeDictionary,
    lattice: &Lattice,
    link: &PathLink,
    bos_class_id: u16,
) -> Score {
    let mut total = 0;
    let mut prev_right = bos_class_id;
    for id in lattice.trace(link) {
        let node = lattice.table.get(id).expect("traced node exists");
        total += dict.connection_cost(prev_right, node.morpheme.left_id);
        total += dict.base_score(&node.morpheme);
        prev_right = node.morpheme.right_id;
    }
    total
}

/// Scores of every complete path through `table`, best first.
pub(crate) fn brute_force_scores(
    dict: &dyn LatticeDictionary,
    table: &NodeTable,
    bos_class_id: u16,
) -> Vec<Score> {
    fn walk(
        dict: &dyn LatticeDictionary,
        table: &NodeTable,
        position: usize,
        prev_right: u16,
        acc: Score,
        out: &mut Vec<Score>,
    ) {
        if position == table.len() {
            out.push(acc);
            return;
        }
        for node in table.at(position) {
            if dict.is_excluded(&node.morpheme) {
                continue;
            }
            let score = acc
                + dict.connection_cost(prev_right, node.morpheme.left_id)
                + dict.base_score(&node.morpheme);
            walk(dict, table, node.end, node.morpheme.right_id, score, out);
        }
    }

    let mut out = Vec::new();
    if !table.is_empty() {
        walk(dict, table, 0, bos_class_id, 0, &mut out);
    }
    out.sort_by(|a, b| b.cmp(a));
    out
}

/// Every link resolves inside `lattice` and points at a node ending where
/// the linking node starts.
pub(crate) fn assert_links_consistent(lattice: &Lattice) {
    for (id, node) in lattice.table.nodes() {
        assert_eq!(node.start, id.position);
        assert_eq!(node.values.len(), node.prevs.len());
        for link in &node.prevs {
            match link.origin {
                Origin::Bos => assert_eq!(node.start, 0),
                Origin::Node { node: from, rank } => {
                    let prev = lattice.table.get(from).expect("link target exists");
                    assert_eq!(prev.end, node.start);
                    assert!(rank < prev.values.len());
                }
            }
        }
    }
    for link in lattice.eos.prevs() {
        match link.origin {
            Origin::Bos => panic!("terminal path without nodes"),
            Origin::Node { node, rank } => {
                let last = lattice.table.get(node).expect("terminal target exists");
                assert_eq!(last.end, lattice.table.len());
                assert_eq!(last.values[rank], link.total);
            }
        }
    }
}

/// Every path list is bounded and non-increasing.
pub(crate) fn assert_bounded(lattice: &Lattice, n_best: usize) {
    let lists = lattice
        .table
        .nodes()
        .map(|(_, node)| node.prevs())
        .chain(std::iter::once(lattice.eos.prevs()));
    for prevs in lists {
        assert!(prevs.len() <= n_best);
        assert!(prevs.windows(2).all(|w| w[0].total >= w[1].total));
    }
}
