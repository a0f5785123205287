//! Severity scale shared by compliance engines and code quality tooling.

use serde::{Deserialize, Serialize};

/// Severity of a finding or evidence record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// DISA STIG category for this severity. CAT I is the most severe.
    /// `Info` has no STIG category.
    pub fn stig_category(&self) -> Option<&'static str> {
        match self {
            Severity::Info => None,
            Severity::Low => Some("CAT III"),
            Severity::Medium => Some("CAT II"),
            Severity::High | Severity::Critical => Some("CAT I"),
        }
    }

    /// Inverse mapping from a STIG category string.
    pub fn from_stig_category(cat: &str) -> Option<Severity> {
        match cat.trim() {
            "CAT I" | "CAT 1" => Some(Severity::High),
            "CAT II" | "CAT 2" => Some(Severity::Medium),
            "CAT III" | "CAT 3" => Some(Severity::Low),
            _ => None,
        }
    }

    /// All severities, least severe first.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Info,
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Low > Severity::Info);
    }

    #[test]
    fn test_stig_roundtrip() {
        assert_eq!(Severity::Medium.stig_category(), Some("CAT II"));
        assert_eq!(Severity::from_stig_category("CAT II"), Some(Severity::Medium));
        assert_eq!(Severity::Info.stig_category(), None);
    }
}
