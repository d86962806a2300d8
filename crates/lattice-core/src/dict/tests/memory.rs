use std::io::Write;

use crate::converter::Morpheme;
use crate::dict::connection::ConnectionMatrix;
use crate::dict::{DictEntry, DictError, LatticeDictionary, MemoryDictionary};

fn sample_dict() -> MemoryDictionary {
    let entries = vec![
        (
            "かん".to_string(),
            vec![
                DictEntry {
                    surface: "管".to_string(),
                    cost: 5200,
                    left_id: 0,
                    right_id: 0,
                },
                DictEntry {
                    surface: "缶".to_string(),
                    cost: 5000,
                    left_id: 0,
                    right_id: 0,
                },
            ],
        ),
        (
            "かんじ".to_string(),
            vec![
                DictEntry {
                    surface: "漢字".to_string(),
                    cost: 5100,
                    left_id: 1,
                    right_id: 2,
                },
                DictEntry {
                    surface: "感じ".to_string(),
                    cost: 5150,
                    left_id: 1,
                    right_id: 2,
                },
            ],
        ),
        (
            "か".to_string(),
            vec![DictEntry {
                surface: "蚊".to_string(),
                cost: 6000,
                left_id: 0,
                right_id: 0,
            }],
        ),
    ];
    MemoryDictionary::from_entries(entries)
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn surfaces(
    dict: &MemoryDictionary,
    input: &str,
    start: usize,
    ends: std::ops::Range<usize>,
) -> Vec<String> {
    dict.matches(&chars(input), start, ends, false)
        .into_iter()
        .map(|n| n.morpheme.surface)
        .collect()
}

#[test]
fn test_lookup_sorted_by_cost() {
    let dict = sample_dict();
    let kan: Vec<&str> = dict.lookup("かん").iter().map(|e| e.surface.as_str()).collect();
    assert_eq!(kan, vec!["缶", "管"]);
    assert!(dict.lookup("ぬ").is_empty());
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_matches_ordered_by_end() {
    let dict = sample_dict();
    let nodes = dict.matches(&chars("かんじ"), 0, 1..4, false);
    let ends: Vec<usize> = nodes.iter().map(|n| n.end).collect();
    assert_eq!(ends, vec![1, 2, 2, 3, 3]);
    assert_eq!(nodes[3].morpheme.reading, "かんじ");
    assert!(nodes.iter().all(|n| n.start == 0 && n.prevs().is_empty()));
}

#[test]
fn test_matches_respect_end_range() {
    let dict = sample_dict();
    assert_eq!(surfaces(&dict, "かんじ", 0, 3..4), vec!["漢字", "感じ"]);
    assert_eq!(surfaces(&dict, "かんじ", 0, 2..3), vec!["缶", "管"]);
    assert!(surfaces(&dict, "かんじ", 0, 4..5).is_empty());
    assert!(surfaces(&dict, "かんじ", 3, 4..5).is_empty());
}

#[test]
fn test_matches_from_later_start() {
    let dict = sample_dict();
    assert_eq!(surfaces(&dict, "かかん", 1, 2..4), vec!["蚊", "缶", "管"]);
}

#[test]
fn test_unknown_fallback_only_without_single_char_entry() {
    let dict = sample_dict().with_unknown_fallback(9000);
    // "か" has a single-char entry, "ん" does not.
    assert_eq!(surfaces(&dict, "かん", 0, 1..3), vec!["蚊", "缶", "管"]);
    let nodes = dict.matches(&chars("かん"), 1, 2..3, false);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].morpheme.surface, "ん");
    assert_eq!(nodes[0].morpheme.cost, 9000);
    // Not in range, no fallback.
    assert!(dict.matches(&chars("かん"), 1, 3..3, false).is_empty());
}

#[test]
fn test_scores_are_negated_costs() {
    let mut conn = ConnectionMatrix::new(3, Vec::new());
    conn.set(2, 1, 300);
    let dict = sample_dict().with_connection(conn);
    let morpheme = Morpheme::from_entry("かん", &dict.lookup("かん")[0]);
    assert_eq!(dict.base_score(&morpheme), -5000);
    assert_eq!(dict.connection_cost(2, 1), -300);
    assert_eq!(dict.connection_cost(1, 2), 0);
}

#[test]
fn test_no_matrix_means_free_transitions() {
    let dict = sample_dict();
    assert!(dict.connection().is_none());
    assert_eq!(dict.connection_cost(1, 2), 0);
}

#[test]
fn test_exclusion_by_surface() {
    let mut dict = sample_dict();
    let entry = &dict.lookup("かんじ")[0].clone();
    let morpheme = Morpheme::from_entry("かんじ", entry);
    assert!(!dict.is_excluded(&morpheme));
    dict.exclude_surface("漢字");
    assert!(dict.is_excluded(&morpheme));
}

#[test]
fn test_from_tsv() {
    let text = concat!(
        "# reading\tsurface\tleft\tright\tcost\n",
        "きょう\t今日\t1\t1\t3000\n",
        "\n",
        "きょう\t京\t1\t1\t5000\n",
        "は\tは\t2\t2\t2000\n",
    );
    let dict = MemoryDictionary::from_tsv(text).unwrap();
    assert_eq!(dict.len(), 2);
    let kyou: Vec<&str> = dict.lookup("きょう").iter().map(|e| e.surface.as_str()).collect();
    assert_eq!(kyou, vec!["今日", "京"]);
    assert_eq!(dict.lookup("は")[0].left_id, 2);
}

#[test]
fn test_from_tsv_reports_line() {
    let text = "きょう\t今日\t1\t1\t3000\nは\tは\tx\t2\t2000\n";
    let err = MemoryDictionary::from_tsv(text).err().unwrap();
    assert!(matches!(err, DictError::InvalidLine { line: 2, .. }));

    let err = MemoryDictionary::from_tsv("きょう\t今日\n").err().unwrap();
    assert!(matches!(err, DictError::InvalidLine { line: 1, .. }));
}

#[test]
fn test_open_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "てんき\t天気\t1\t1\t4000").unwrap();
    let dict = MemoryDictionary::open(file.path()).unwrap();
    assert_eq!(dict.lookup("てんき")[0].surface, "天気");
}

#[test]
fn test_open_missing_file() {
    let err = MemoryDictionary::open(std::path::Path::new("/nonexistent/lexicon.tsv"))
        .err()
        .unwrap();
    assert!(matches!(err, DictError::Io(_)));
}
