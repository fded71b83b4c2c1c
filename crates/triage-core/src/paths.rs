//! Data directory conventions.
//!
//! Pure string functions with no filesystem access. These define where the
//! document store expects each region's rule document and decision graph,
//! relative to the configured data directory.

pub const RULES_DIR: &str = "rules";
pub const GRAPHS_DIR: &str = "graphs";

pub fn rule_document(region: &str) -> String {
    format!("{RULES_DIR}/{region}.json")
}

pub fn decision_graph(region: &str) -> String {
    format!("{GRAPHS_DIR}/{region}.json")
}

/// Region names are lowercase ASCII letters, digits, `_` and `-`, so they
/// can never escape the data directory.
pub fn is_valid_region(region: &str) -> bool {
    !region.is_empty()
        && region
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

/// Extract the region from a document file name (`lumbar.json` → `lumbar`).
pub fn region_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(".json")
        .filter(|region| is_valid_region(region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_paths_are_region_scoped() {
        assert_eq!(rule_document("lumbar"), "rules/lumbar.json");
        assert_eq!(decision_graph("cervical"), "graphs/cervical.json");
    }

    #[test]
    fn region_names_cannot_traverse() {
        assert!(is_valid_region("lumbar"));
        assert!(is_valid_region("foot-ankle_2"));
        assert!(!is_valid_region("../secrets"));
        assert!(!is_valid_region("Lumbar"));
        assert!(!is_valid_region(""));
    }

    #[test]
    fn region_from_file_name_ignores_other_files() {
        assert_eq!(region_from_file_name("knee.json"), Some("knee"));
        assert_eq!(region_from_file_name("README.md"), None);
        assert_eq!(region_from_file_name(".json"), None);
        assert_eq!(region_from_file_name(".hidden.json"), None);
    }
}
