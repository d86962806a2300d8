
use std::sync::Arc;

use lattice_core::converter::LatticeOptions;
use lattice_core::dict::connection::ConnectionMatrix;
use lattice_core::dict::{DictEntry, MemoryDictionary};

use super::ComposingSession;

fn entry(surface: &str, cost: i16, id: u16) -> DictEntry {
    DictEntry {
        surface: surface.to_string(),
        cost,
        left_id: id,
        right_id: id,
    }
}

pub(super) fn make_test_dict() -> Arc<MemoryDictionary> {
    let entries = vec![
        (
            "きょう".to_string(),
            vec![entry("今日", 3000, 1), entry("京", 5000, 1)],
        ),
        (
            "き".to_string(),
            vec![entry("木", 4000, 1), entry("気", 4200, 1)],
        ),
        (
            "は".to_string(),
            vec![entry("は", 2000, 2), entry("葉", 4500, 1)],
        ),
        (
            "いい".to_string(),
            vec![entry("良い", 3500, 3), entry("いい", 4000, 3)],
        ),
        ("い".to_string(), vec![entry("胃", 5000, 1)]),
        (
            "てんき".to_string(),
            vec![entry("天気", 4000, 1), entry("転記", 6000, 1)],
        ),
        (
            "てん".to_string(),
            vec![entry("点", 4000, 1), entry("天", 4500, 1)],
        ),
    ];
    let mut conn = ConnectionMatrix::new(4, Vec::new());
    conn.set(1, 1, 1500);
    conn.set(1, 2, -500);
    conn.set(2, 3, 200);
    conn.set(3, 1, 300);
    Arc::new(
        MemoryDictionary::from_entries(entries)
            .with_connection(conn)
            .with_unknown_fallback(10000),
    )
}

pub(super) fn make_session(n_best: usize) -> ComposingSession {
    ComposingSession::with_options(
        make_test_dict(),
        LatticeOptions {
            n_best,
            bos_class_id: 0,
            typo_correction: false,
        },
    )
}
