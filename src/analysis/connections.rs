use crate::entities::health_issue;
use serde::Serialize;

/// A known cross-system relationship surfaced when both endpoints match some
/// issue in the scan result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SystemConnection {
    pub from: &'static str,
    pub to: &'static str,
    pub description: &'static str,
}

struct SystemLink {
    from: &'static str,
    from_keywords: &'static [&'static str],
    to: &'static str,
    to_keywords: &'static [&'static str],
    description: &'static str,
}

// Declarative relationship table. An issue matches an endpoint when its name
// or category contains one of the keywords (case-insensitive). Keywords are
// lowercase stems so "Inflammation" matches "inflammat".
const SYSTEM_LINKS: &[SystemLink] = &[
    SystemLink {
        from: "Gut Flora",
        from_keywords: &["gut", "flora", "microbiome", "digest"],
        to: "Hormones",
        to_keywords: &["hormone", "thyroid", "adrenal", "cortisol"],
        description: "An imbalanced gut microbiome interferes with hormone regulation.",
    },
    SystemLink {
        from: "Hormones",
        from_keywords: &["hormone", "thyroid", "adrenal", "cortisol"],
        to: "Energy",
        to_keywords: &["energy", "fatigue", "mitochondri"],
        description: "Hormonal imbalance commonly shows up as low energy and fatigue.",
    },
    SystemLink {
        from: "Nervous System",
        from_keywords: &["stress", "nervous", "anxiety"],
        to: "Sleep",
        to_keywords: &["sleep", "insomnia", "circadian"],
        description: "Elevated stress load keeps the nervous system activated and degrades sleep.",
    },
    SystemLink {
        from: "Immune System",
        from_keywords: &["immune", "inflammat", "allergy"],
        to: "Gut Flora",
        to_keywords: &["gut", "flora", "microbiome", "digest"],
        description: "Chronic inflammation and gut barrier function influence each other.",
    },
    SystemLink {
        from: "Liver",
        from_keywords: &["liver", "detox"],
        to: "Hormones",
        to_keywords: &["hormone", "thyroid", "adrenal", "cortisol"],
        description: "A strained liver clears used hormones more slowly.",
    },
];

fn matches_any(issue: &health_issue::Model, keywords: &[&str]) -> bool {
    let name = issue.name.to_lowercase();
    let category = issue.category.to_lowercase();
    keywords
        .iter()
        .any(|k| name.contains(k) || category.contains(k))
}

/// Looks up cross-system connections for the given issues. A link is emitted
/// only when both of its endpoints match at least one issue; no keyword
/// matches means an empty result.
pub fn derive_connections(issues: &[health_issue::Model]) -> Vec<SystemConnection> {
    SYSTEM_LINKS
        .iter()
        .filter(|link| {
            issues.iter().any(|i| matches_any(i, link.from_keywords))
                && issues.iter().any(|i| matches_any(i, link.to_keywords))
        })
        .map(|link| SystemConnection {
            from: link.from,
            to: link.to,
            description: link.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: i32, name: &str, category: &str) -> health_issue::Model {
        health_issue::Model {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            load: 50,
            recommendations: None,
            detailed_info: None,
            specific_advice: None,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn no_keyword_matches_returns_empty() {
        let issues = vec![issue(1, "Posture", "musculoskeletal")];
        assert!(derive_connections(&issues).is_empty());
    }

    #[test]
    fn both_endpoints_required() {
        // Gut present, hormones absent: no link.
        let issues = vec![issue(1, "Gut Flora Imbalance", "digestion")];
        assert!(derive_connections(&issues).is_empty());
    }

    #[test]
    fn matching_pair_emits_link() {
        let issues = vec![
            issue(1, "Gut Flora Imbalance", "digestion"),
            issue(2, "Thyroid Stress", "hormones"),
        ];
        let connections = derive_connections(&issues);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].from, "Gut Flora");
        assert_eq!(connections[0].to, "Hormones");
    }

    #[test]
    fn match_is_case_insensitive_and_checks_category() {
        let issues = vec![
            issue(1, "Chronic INFLAMMATION", "immune"),
            issue(2, "Bloating", "digestive system"),
        ];
        let connections = derive_connections(&issues);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].from, "Immune System");
    }
}
