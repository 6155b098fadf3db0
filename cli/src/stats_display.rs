use tictactoe_common::stats::SessionStats;

pub fn format_summary(stats: &SessionStats) -> String {
    [
        format!("  Win rate:       {:>8.1}%", stats.win_rate()),
        format!("  Games played:   {:>8}", stats.games),
        format!("  Avg compute:    {:>8.1}ms", stats.average_time_per_decision()),
        format!("  States/move:    {:>8}", stats.average_states_per_decision()),
        format!("  Engine wins:    {:>8}", stats.engine_wins),
        format!("  Opponent wins:  {:>8}", stats.opponent_wins),
        format!("  Draws:          {:>8}", stats.draws),
        format!("  Total states:   {:>8}", stats.total_states_visited),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::stats::GameOutcome;

    #[test]
    fn test_summary_of_empty_stats() {
        let summary = format_summary(&SessionStats::default());
        assert!(summary.contains("Win rate:            0.0%"));
        assert!(summary.contains("States/move:           0"));
    }

    #[test]
    fn test_summary_reports_counters() {
        let mut stats = SessionStats::default();
        stats.record_outcome(GameOutcome::EngineWin);
        stats.record_outcome(GameOutcome::Draw);
        let summary = format_summary(&stats);
        assert!(summary.contains("50.0%"));
        assert!(summary.contains("Games played:          2"));
        assert_eq!(summary.lines().count(), 8);
    }
}
