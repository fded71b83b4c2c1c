//! Condition-name resolution.
//!
//! Effects reference conditions by free text. A name resolves to the first
//! declared condition whose name matches case-insensitively; failing that, to
//! the first whose name contains, or is contained in, the reference. Exact
//! matches always win over containment, regardless of declaration order.

use triage_core::models::rules::Condition;

/// Resolve a free-text condition reference to an index into `conditions`.
pub fn resolve_condition(conditions: &[Condition], name: &str) -> Option<usize> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let names: Vec<String> = conditions
        .iter()
        .map(|c| c.name.trim().to_lowercase())
        .collect();

    names.iter().position(|n| *n == needle).or_else(|| {
        names
            .iter()
            .position(|n| !n.is_empty() && (n.contains(&needle) || needle.contains(n.as_str())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(names: &[&str]) -> Vec<Condition> {
        names
            .iter()
            .map(|name| Condition {
                name: name.to_string(),
                questions: Vec::new(),
                tests: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn exact_match_ignores_case() {
        let c = conditions(&["Spinal Stenosis", "Lumbar Disc Herniation"]);
        assert_eq!(resolve_condition(&c, "lumbar disc herniation"), Some(1));
    }

    #[test]
    fn exact_match_beats_earlier_containment() {
        let c = conditions(&["Lumbar Disc Herniation with Radiculopathy", "Lumbar Disc Herniation"]);
        assert_eq!(resolve_condition(&c, "Lumbar Disc Herniation"), Some(1));
    }

    #[test]
    fn containment_works_in_both_directions() {
        let c = conditions(&["Facet Joint Syndrome", "Sacroiliac Joint Dysfunction"]);
        assert_eq!(resolve_condition(&c, "Sacroiliac"), Some(1));
        assert_eq!(resolve_condition(&c, "Lumbar Facet Joint Syndrome (L4-L5)"), Some(0));
    }

    #[test]
    fn first_declared_containment_wins() {
        let c = conditions(&["Rotator Cuff Tendinopathy", "Rotator Cuff Tear"]);
        assert_eq!(resolve_condition(&c, "rotator cuff"), Some(0));
    }

    #[test]
    fn blank_or_unknown_names_do_not_resolve() {
        let c = conditions(&["Plantar Fasciitis"]);
        assert_eq!(resolve_condition(&c, "   "), None);
        assert_eq!(resolve_condition(&c, "Achilles Tendinopathy"), None);
    }
}
