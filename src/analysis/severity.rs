use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

/// Display classification for a 0-100 value: bucket plus the color token
/// clients key their styling on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeverityLabel {
    pub severity: Severity,
    pub label: &'static str,
    pub color_token: &'static str,
}

/// Classifies an issue load. Total over any integer: negative values land in
/// the low bucket, values above 100 in the high bucket.
pub fn classify_load(value: i32) -> SeverityLabel {
    if value < 20 {
        SeverityLabel {
            severity: Severity::Low,
            label: "low",
            color_token: "green",
        }
    } else if value < 50 {
        SeverityLabel {
            severity: Severity::Moderate,
            label: "moderate",
            color_token: "amber",
        }
    } else {
        SeverityLabel {
            severity: Severity::High,
            label: "high",
            color_token: "red",
        }
    }
}

/// Classifies a coherence score. Higher is better here, so the color scale is
/// inverted relative to [`classify_load`] and the breakpoints sit at 40/60.
pub fn classify_score(value: i32) -> SeverityLabel {
    if value < 40 {
        SeverityLabel {
            severity: Severity::Low,
            label: "low",
            color_token: "red",
        }
    } else if value < 60 {
        SeverityLabel {
            severity: Severity::Moderate,
            label: "moderate",
            color_token: "amber",
        }
    } else {
        SeverityLabel {
            severity: Severity::High,
            label: "high",
            color_token: "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_breakpoints() {
        assert_eq!(classify_load(0).severity, Severity::Low);
        assert_eq!(classify_load(19).severity, Severity::Low);
        assert_eq!(classify_load(20).severity, Severity::Moderate);
        assert_eq!(classify_load(49).severity, Severity::Moderate);
        assert_eq!(classify_load(50).severity, Severity::High);
        assert_eq!(classify_load(100).severity, Severity::High);
    }

    #[test]
    fn out_of_range_values_fall_into_nearest_bucket() {
        assert_eq!(classify_load(-5).severity, Severity::Low);
        assert_eq!(classify_load(140).severity, Severity::High);
        assert_eq!(classify_score(-1).severity, Severity::Low);
        assert_eq!(classify_score(300).severity, Severity::High);
    }

    #[test]
    fn score_colors_are_inverted() {
        assert_eq!(classify_score(30).color_token, "red");
        assert_eq!(classify_score(50).color_token, "amber");
        assert_eq!(classify_score(82).color_token, "green");
        assert_eq!(classify_load(82).color_token, "red");
    }
}
