use crate::entities::health_issue;
use serde::Serialize;

// Priority banding thresholds on issue load.
pub const HIGH_LOAD_THRESHOLD: i32 = 60;
pub const MODERATE_LOAD_THRESHOLD: i32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityBand {
    High,
    Moderate,
    Low,
}

impl PriorityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityBand::High => "high",
            PriorityBand::Moderate => "moderate",
            PriorityBand::Low => "low",
        }
    }

    /// Parses the `/issues/priority/:band` route segment.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "high" => Some(PriorityBand::High),
            "moderate" => Some(PriorityBand::Moderate),
            "low" => Some(PriorityBand::Low),
            _ => None,
        }
    }
}

pub fn band_for(load: i32) -> PriorityBand {
    if load >= HIGH_LOAD_THRESHOLD {
        PriorityBand::High
    } else if load >= MODERATE_LOAD_THRESHOLD {
        PriorityBand::Moderate
    } else {
        PriorityBand::Low
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PriorityGroups {
    pub high: Vec<health_issue::Model>,
    pub moderate: Vec<health_issue::Model>,
    pub low: Vec<health_issue::Model>,
}

/// Partitions issues into priority bands. Each band is sorted descending by
/// load with a stable sort, so equal loads keep their input order. The bands
/// are disjoint and together contain every input issue.
pub fn group_by_priority(issues: Vec<health_issue::Model>) -> PriorityGroups {
    let mut groups = PriorityGroups::default();
    for issue in issues {
        match band_for(issue.load) {
            PriorityBand::High => groups.high.push(issue),
            PriorityBand::Moderate => groups.moderate.push(issue),
            PriorityBand::Low => groups.low.push(issue),
        }
    }
    groups.high.sort_by_key(|i| std::cmp::Reverse(i.load));
    groups.moderate.sort_by_key(|i| std::cmp::Reverse(i.load));
    groups.low.sort_by_key(|i| std::cmp::Reverse(i.load));
    groups
}

/// Top-N issues by load for summary cards.
pub fn top_issues(issues: &[health_issue::Model], n: usize) -> Vec<health_issue::Model> {
    let mut sorted = issues.to_vec();
    sorted.sort_by_key(|i| std::cmp::Reverse(i.load));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(id: i32, name: &str, load: i32) -> health_issue::Model {
        health_issue::Model {
            id,
            name: name.to_string(),
            category: "general".to_string(),
            description: String::new(),
            load,
            recommendations: None,
            detailed_info: None,
            specific_advice: None,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    #[test]
    fn bands_are_disjoint_and_cover_input() {
        let input = vec![
            issue(1, "a", 75),
            issue(2, "b", 59),
            issue(3, "c", 30),
            issue(4, "d", 29),
            issue(5, "e", 60),
            issue(6, "f", 0),
        ];
        let groups = group_by_priority(input.clone());

        assert!(groups.high.iter().all(|i| i.load >= HIGH_LOAD_THRESHOLD));
        assert!(groups
            .moderate
            .iter()
            .all(|i| i.load >= MODERATE_LOAD_THRESHOLD && i.load < HIGH_LOAD_THRESHOLD));
        assert!(groups.low.iter().all(|i| i.load < MODERATE_LOAD_THRESHOLD));

        let mut ids: Vec<i32> = groups
            .high
            .iter()
            .chain(groups.moderate.iter())
            .chain(groups.low.iter())
            .map(|i| i.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn bands_sort_descending_with_stable_ties() {
        let groups = group_by_priority(vec![
            issue(1, "first", 70),
            issue(2, "second", 90),
            issue(3, "third", 70),
        ]);
        let ids: Vec<i32> = groups.high.iter().map(|i| i.id).collect();
        // 90 first, then the two 70s in input order
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn empty_input_yields_three_empty_bands() {
        let groups = group_by_priority(vec![]);
        assert!(groups.high.is_empty());
        assert!(groups.moderate.is_empty());
        assert!(groups.low.is_empty());
    }

    #[test]
    fn top_issues_slices_by_load() {
        let all = vec![issue(1, "a", 10), issue(2, "b", 80), issue(3, "c", 45)];
        let top = top_issues(&all, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, 2);
        assert_eq!(top[1].id, 3);
    }

    #[test]
    fn band_slug_roundtrip() {
        assert_eq!(PriorityBand::from_slug("high"), Some(PriorityBand::High));
        assert_eq!(PriorityBand::from_slug("nope"), None);
        assert_eq!(PriorityBand::Moderate.as_str(), "moderate");
    }
}
