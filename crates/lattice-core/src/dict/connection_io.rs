use std::fs;
use std::path::Path;

use super::connection::ConnectionMatrix;
use super::DictError;

impl ConnectionMatrix {
    /// Build from matrix text.
    ///
    /// Supports two formats (auto-detected):
    /// - **Mozc**: Line 1 is `num_ids` (or `num_left num_right`), then one cost per line.
    /// - **MeCab**: Line 1 is `num_left num_right`, then `right_id left_id cost` per line.
    pub fn from_text(text: &str) -> Result<Self, DictError> {
        let mut lines = text.lines().peekable();

        let header = lines
            .next()
            .ok_or_else(|| DictError::Parse("empty file".to_string()))?;
        let parts: Vec<&str> = header.split_whitespace().collect();
        let num_ids: u16 = match parts.len() {
            1 => parts[0]
                .parse()
                .map_err(|e| DictError::Parse(format!("invalid num_ids: {e}")))?,
            2 => {
                let nl: u16 = parts[0]
                    .parse()
                    .map_err(|e| DictError::Parse(format!("invalid num_left: {e}")))?;
                let nr: u16 = parts[1]
                    .parse()
                    .map_err(|e| DictError::Parse(format!("invalid num_right: {e}")))?;
                if nl != nr {
                    return Err(DictError::Parse(format!(
                        "num_left ({nl}) != num_right ({nr})"
                    )));
                }
                nl
            }
            _ => {
                return Err(DictError::Parse(format!(
                    "expected 1 or 2 values in header, got {}",
                    parts.len()
                )));
            }
        };

        let expected = num_ids as usize * num_ids as usize;

        while lines.peek().is_some_and(|line| line.trim().is_empty()) {
            lines.next();
        }
        let is_triplet = lines
            .peek()
            .is_some_and(|line| line.split_whitespace().count() == 3);

        let costs = if is_triplet {
            // MeCab rows are "right_id left_id cost": the right class of the
            // preceding morpheme, then the left class of the following one.
            let mut costs = vec![0i16; expected];
            for (offset, line) in lines.enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let invalid = |reason: String| DictError::InvalidLine {
                    line: offset + 2,
                    reason,
                };
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() != 3 {
                    return Err(invalid(format!("expected 3 fields, got {}", fields.len())));
                }
                let right_id: usize = fields[0]
                    .parse()
                    .map_err(|e| invalid(format!("right_id: {e}")))?;
                let left_id: usize = fields[1]
                    .parse()
                    .map_err(|e| invalid(format!("left_id: {e}")))?;
                let cost: i16 = fields[2]
                    .parse()
                    .map_err(|e| invalid(format!("cost: {e}")))?;
                if right_id >= num_ids as usize || left_id >= num_ids as usize {
                    return Err(invalid(format!(
                        "index out of bounds: ({right_id}, {left_id})"
                    )));
                }
                let idx = right_id * num_ids as usize + left_id;
                costs[idx] = cost;
            }
            costs
        } else {
            let mut costs = Vec::with_capacity(expected);
            for line in lines {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let cost: i16 = line
                    .parse()
                    .map_err(|e| DictError::Parse(format!("invalid cost '{line}': {e}")))?;
                costs.push(cost);
            }
            if costs.len() != expected {
                return Err(DictError::Parse(format!(
                    "expected {expected} costs, got {}",
                    costs.len()
                )));
            }
            costs
        };

        Ok(Self::new(num_ids, costs))
    }

    /// Load matrix text from a file.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }
}
