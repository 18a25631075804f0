//! Severity classes and their penalty/label tables.

use serde::{Deserialize, Serialize};

/// Closed severity set. Each class maps to a fixed miss penalty and its own
/// label pool.
///
/// Design note: Using an enum (not an open string key) makes the table
/// exhaustiveness-checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Everyday chore. Cheap to miss.
    Minor,
    /// Obligation with a real cost.
    Major,
    /// Drop this one and the week is ruined.
    Critical,
}

impl Severity {
    /// All classes, for uniform selection at spawn.
    pub const ALL: [Severity; 3] = [Severity::Minor, Severity::Major, Severity::Critical];

    /// Score delta applied when a task of this class expires unhandled.
    /// Always negative.
    pub fn penalty(self) -> i64 {
        match self {
            Severity::Minor => -1,
            Severity::Major => -3,
            Severity::Critical => -10,
        }
    }

    /// Labels drawn for tasks of this class.
    pub fn label_pool(self) -> &'static [&'static str] {
        match self {
            Severity::Minor => &["eat", "cook", "clean", "exercise", "hang painting"],
            Severity::Major => &[
                "sleep",
                "work",
                "fix guitar",
                "call pharmacy",
                "call insurance",
            ],
            Severity::Critical => &[
                "taxes",
                "go to doctor",
                "pick up prescription",
                "administer injection",
                "pharmacy needs SC10 code???",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::minor(Severity::Minor, -1)]
    #[case::major(Severity::Major, -3)]
    #[case::critical(Severity::Critical, -10)]
    fn penalty_table(#[case] severity: Severity, #[case] expected: i64) {
        assert_eq!(severity.penalty(), expected);
    }

    #[test]
    fn every_class_has_labels() {
        for severity in Severity::ALL {
            assert!(!severity.label_pool().is_empty());
        }
    }

    #[test]
    fn penalties_are_negative() {
        for severity in Severity::ALL {
            assert!(severity.penalty() < 0);
        }
    }
}
