//! Status colour lookup shared by event chips and the legend.

/// Background, text and border classes for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl StatusStyle {
    /// All three classes joined, ready for a `class` attribute
    pub fn classes(&self) -> String {
        format!("{} {} {}", self.background, self.text, self.border)
    }
}

const CONFIRMED: StatusStyle = StatusStyle {
    background: "bg-blue-100",
    text: "text-blue-800",
    border: "border-blue-200",
};

const PENDING: StatusStyle = StatusStyle {
    background: "bg-yellow-100",
    text: "text-yellow-800",
    border: "border-yellow-200",
};

const CANCELLED: StatusStyle = StatusStyle {
    background: "bg-red-100",
    text: "text-red-800",
    border: "border-red-200",
};

const NEUTRAL: StatusStyle = StatusStyle {
    background: "bg-gray-100",
    text: "text-gray-800",
    border: "border-gray-200",
};

/// Look up the style for a canonical (uppercase) status value.
///
/// Matching is case-sensitive; callers normalise before calling.
pub fn status_style(status: &str) -> StatusStyle {
    match status {
        "CONFIRMED" => CONFIRMED,
        "PENDING" => PENDING,
        "CANCELLED" => CANCELLED,
        _ => NEUTRAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(
            status_style("CONFIRMED").classes(),
            "bg-blue-100 text-blue-800 border-blue-200"
        );
        assert_eq!(
            status_style("PENDING").classes(),
            "bg-yellow-100 text-yellow-800 border-yellow-200"
        );
        assert_eq!(
            status_style("CANCELLED").classes(),
            "bg-red-100 text-red-800 border-red-200"
        );
    }

    #[test]
    fn test_unknown_status_falls_back_to_neutral() {
        for status in ["", "CHECKED_IN", "REFUNDED", "all"] {
            assert_eq!(status_style(status), NEUTRAL, "status {:?}", status);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(status_style("confirmed"), NEUTRAL);
        assert_eq!(status_style(&"confirmed".to_uppercase()), CONFIRMED);
    }
}
