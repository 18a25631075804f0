//! Score accumulator.

use crate::domain::Severity;

/// Running score. Mutated only by task expiry (penalty) and dismissal
/// (reward); unbounded in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreBoard {
    total: i64,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    /// Apply the miss penalty for one expired task.
    pub fn apply_penalty(&mut self, severity: Severity) {
        self.total += severity.penalty();
    }

    /// Apply the dismissal reward: always exactly +1.
    pub fn apply_reward(&mut self) {
        self.total += 1;
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
    fn penalty_moves_the_total_by_the_table_value(
        #[case] severity: Severity,
        #[case] expected: i64,
    ) {
        let mut score = ScoreBoard::new();
        score.apply_penalty(severity);
        assert_eq!(score.total(), expected);
    }

    #[test]
    fn reward_is_exactly_plus_one() {
        let mut score = ScoreBoard::new();
        score.apply_reward();
        assert_eq!(score.total(), 1);
    }

    #[test]
    fn score_may_go_negative_and_recover() {
        let mut score = ScoreBoard::new();
        score.apply_penalty(Severity::Critical);
        score.apply_reward();
        score.apply_reward();
        assert_eq!(score.total(), -8);
    }
}
