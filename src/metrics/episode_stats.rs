use serde::{Deserialize, Serialize};

/// Aggregate statistics over finished episodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub games_played: u32,
    pub high_score: u32,
    pub total_food: u64,
    pub total_ticks: u64,
}

impl EpisodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_episode_end(&mut self, final_score: u32, ticks: u64) {
        self.games_played += 1;
        self.total_food += u64::from(final_score);
        self.total_ticks += ticks;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn mean_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_food as f64 / f64::from(self.games_played)
    }
}

/// Change in score observed between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// Score went up to the contained value
    FoodFound(u32),
}

/// Watches the score across ticks and reports when it goes up
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    last_score: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous episode's score
    pub fn reset(&mut self) {
        self.last_score = 0;
    }

    pub fn observe(&mut self, score: u32) -> Option<ScoreEvent> {
        let event = (score > self.last_score).then_some(ScoreEvent::FoodFound(score));
        self.last_score = score;
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_tracking() {
        let mut stats = EpisodeStats::new();

        stats.on_episode_end(10, 100);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.games_played, 1);

        stats.on_episode_end(5, 40);
        assert_eq!(stats.high_score, 10); // Should not decrease
        assert_eq!(stats.games_played, 2);

        stats.on_episode_end(15, 60);
        assert_eq!(stats.high_score, 15); // Should update
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.total_ticks, 200);
        assert_eq!(stats.mean_score(), 10.0);
    }

    #[test]
    fn test_mean_score_without_games() {
        assert_eq!(EpisodeStats::new().mean_score(), 0.0);
    }

    #[test]
    fn test_score_events() {
        let mut tracker = ScoreTracker::new();

        assert_eq!(tracker.observe(0), None);
        assert_eq!(tracker.observe(1), Some(ScoreEvent::FoodFound(1)));
        assert_eq!(tracker.observe(1), None);
        assert_eq!(tracker.observe(2), Some(ScoreEvent::FoodFound(2)));
        assert_eq!(tracker.observe(0), None);
    }

    #[test]
    fn test_reset_starts_from_zero() {
        let mut tracker = ScoreTracker::new();
        tracker.observe(3);

        tracker.reset();

        assert_eq!(tracker.observe(1), Some(ScoreEvent::FoodFound(1)));
    }
}
