use std::collections::VecDeque;

use crate::game::Mark;

/// Result of a single episode.
#[derive(Debug, Clone)]
pub struct EpisodeResult {
    pub winner: Option<Mark>,
    pub game_length: usize,
    pub total_reward: f32,
    pub rejected_moves: usize,
}

/// Rollout metrics tracker with rolling window computations.
pub struct TrainingMetrics {
    episode_results: VecDeque<EpisodeResult>,
    capacity: usize,
    total_episodes: usize, // lifetime count, never capped
}

impl TrainingMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        TrainingMetrics {
            episode_results: VecDeque::with_capacity(capacity),
            capacity,
            total_episodes: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_episode(&mut self, result: EpisodeResult) {
        self.total_episodes += 1;
        self.episode_results.push_back(result);
        if self.episode_results.len() > self.capacity {
            self.episode_results.pop_front();
        }
    }

    /// Win rate for the agent (X) in the last N episodes.
    pub fn win_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner == Some(Mark::X))
    }

    /// Draw rate in the last N episodes.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner.is_none())
    }

    /// Opponent win rate in the last N episodes.
    pub fn loss_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner == Some(Mark::O))
    }

    fn rate(&self, last_n: usize, pred: impl Fn(&EpisodeResult) -> bool) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .filter(|r| pred(r))
            .count();
        hits as f32 / n as f32
    }

    /// Average episode length over the last N episodes.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    /// Average episode reward over the last N episodes.
    pub fn average_reward(&self, last_n: usize) -> f32 {
        let n = self.episode_results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: f32 = self
            .episode_results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.total_reward)
            .sum();
        total / n as f32
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }
}

impl Default for TrainingMetrics {
    fn default() -> Self {
        Self::new()
    }
}
