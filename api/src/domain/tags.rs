// Asset tag generation: configured prefix followed by a 6-digit sequence

const SEQUENCE_WIDTH: usize = 6;

/// Numeric suffix of a tag carrying `prefix`, if it has one
fn sequence_of(tag: &str, prefix: &str) -> Option<u64> {
    let rest = tag.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// The `count` tags following the highest existing sequence for `prefix`
pub fn next_asset_tags<S: AsRef<str>>(prefix: &str, existing: &[S], count: usize) -> Vec<String> {
    let highest = existing
        .iter()
        .filter_map(|tag| sequence_of(tag.as_ref(), prefix))
        .max()
        .unwrap_or(0);

    (1..=count as u64)
        .map(|step| format!("{}{:0width$}", prefix, highest + step, width = SEQUENCE_WIDTH))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tag() {
        let none: [&str; 0] = [];
        assert_eq!(next_asset_tags("AST-", &none, 1), vec!["AST-000001"]);
    }

    #[test]
    fn test_follows_highest_sequence() {
        let existing = ["AST-000002", "AST-000010", "AST-LEGACY", "OLD-000500"];
        assert_eq!(next_asset_tags("AST-", &existing, 1), vec!["AST-000011"]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(next_asset_tags("AST-", &["AST-000001"], 0).is_empty());
    }

    #[test]
    fn test_batch_is_contiguous() {
        let existing = ["IT-000007"];
        assert_eq!(
            next_asset_tags("IT-", &existing, 3),
            vec!["IT-000008", "IT-000009", "IT-000010"]
        );
    }
}
