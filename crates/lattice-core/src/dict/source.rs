use std::fs;
use std::path::Path;

use super::{DictEntry, DictError, MemoryDictionary};

impl MemoryDictionary {
    /// Parse a lexicon in TSV form.
    ///
    /// Each line is `reading<TAB>surface<TAB>left_id<TAB>right_id<TAB>cost`.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_tsv(text: &str) -> Result<Self, DictError> {
        let mut entries: Vec<(String, Vec<DictEntry>)> = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = |reason: String| DictError::InvalidLine {
                line: idx + 1,
                reason,
            };
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 5 {
                return Err(invalid(format!("expected 5 fields, got {}", fields.len())));
            }
            if fields[0].is_empty() {
                return Err(invalid("empty reading".to_string()));
            }
            let left_id: u16 = fields[2]
                .parse()
                .map_err(|e| invalid(format!("left_id: {e}")))?;
            let right_id: u16 = fields[3]
                .parse()
                .map_err(|e| invalid(format!("right_id: {e}")))?;
            let cost: i16 = fields[4]
                .parse()
                .map_err(|e| invalid(format!("cost: {e}")))?;
            entries.push((
                fields[0].to_string(),
                vec![DictEntry {
                    surface: fields[1].to_string(),
                    cost,
                    left_id,
                    right_id,
                }],
            ));
        }
        Ok(Self::from_entries(entries))
    }

    /// Load a TSV lexicon from a file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Self::from_tsv(&text)
    }
}
