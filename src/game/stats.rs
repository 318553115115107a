//! Per-process round statistics

use super::outcome::RoundState;
use super::session::RoundSummary;

/// Tally of finished rounds; lives only as long as the process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub best_score: Option<i32>,
    pub total_score: i64,
}

impl Statistics {
    /// Add a finished round; rounds still in progress are ignored
    pub fn record(&mut self, summary: &RoundSummary) {
        if !summary.state.is_over() {
            return;
        }

        self.rounds_played += 1;
        if summary.state == RoundState::Won {
            self.rounds_won += 1;
        }
        self.total_score += i64::from(summary.final_score);
        self.best_score = Some(
            self.best_score
                .map_or(summary.final_score, |best| best.max(summary.final_score)),
        );
    }

    /// Percentage of rounds won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.total_score as f64 / self.rounds_played as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tier;

    fn summary(state: RoundState, final_score: i32) -> RoundSummary {
        RoundSummary {
            tier: Tier::Medium,
            word: "python".to_string(),
            state,
            final_score,
            misses: 0,
            hint_used: false,
        }
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.rounds_played, 0);
        assert_eq!(stats.best_score, None);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert!(stats.average_score().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(&summary(RoundState::Won, 120));
        stats.record(&summary(RoundState::Lost, 0));
        stats.record(&summary(RoundState::Won, 90));

        assert_eq!(stats.rounds_played, 3);
        assert_eq!(stats.rounds_won, 2);
        assert_eq!(stats.best_score, Some(120));
        assert_eq!(stats.total_score, 210);
        assert!((stats.average_score() - 70.0).abs() < 1e-9);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unfinished_rounds_are_ignored() {
        let mut stats = Statistics::default();
        stats.record(&summary(RoundState::InProgress, 110));
        assert_eq!(stats, Statistics::default());
    }
}
