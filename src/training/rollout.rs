use std::io::Write;

use crate::ai::Agent;
use crate::env::TatetiEnv;
use crate::error::RolloutError;
use crate::training::episode::play_episode;
use crate::training::metrics::TrainingMetrics;

/// Rollout configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RolloutConfig {
    pub num_episodes: usize,
    pub log_interval: usize,
    pub quiet: bool,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        RolloutConfig {
            num_episodes: 1_000,
            log_interval: 100,
            quiet: false,
        }
    }
}

/// Headless episode driver: runs a policy against the environment for a
/// fixed number of episodes and aggregates metrics. With an export sink it
/// also streams every experience as one JSON object per line, the format an
/// external trainer ingests.
pub struct Rollout {
    config: RolloutConfig,
}

impl Rollout {
    pub fn new(config: RolloutConfig) -> Self {
        Rollout { config }
    }

    /// Run the full rollout loop.
    pub fn run(
        &self,
        env: &mut TatetiEnv,
        agent: &mut dyn Agent,
        mut export: Option<&mut dyn Write>,
    ) -> Result<TrainingMetrics, RolloutError> {
        // Window over the whole run so the final summary is not clipped.
        let mut metrics = TrainingMetrics::with_capacity(self.config.num_episodes);

        if !self.config.quiet {
            println!(
                "Rolling out {} episodes with the {} agent...",
                self.config.num_episodes,
                agent.name()
            );
            println!("-------------------------------------------");
        }

        for episode in 1..=self.config.num_episodes {
            let trace = play_episode(env, agent)?;

            if let Some(sink) = export.as_deref_mut() {
                for experience in &trace.experiences {
                    serde_json::to_writer(&mut *sink, experience)?;
                    sink.write_all(b"\n")?;
                }
            }

            metrics.record_episode(trace.result);

            if !self.config.quiet && episode % self.config.log_interval == 0 {
                let window = self.config.log_interval;
                println!(
                    "Episode {}/{} | win_rate({}): {:.1}% | draw: {:.1}% | avg_len: {:.1} | avg_reward: {:.1}",
                    episode,
                    self.config.num_episodes,
                    window,
                    metrics.win_rate(window) * 100.0,
                    metrics.draw_rate(window) * 100.0,
                    metrics.average_game_length(window),
                    metrics.average_reward(window),
                );
            }
        }

        Ok(metrics)
    }
}
