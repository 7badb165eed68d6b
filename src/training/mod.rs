//! Training front-end: episode rollouts over the environment, experience
//! records for an external learner, and rolling metrics.

pub mod episode;
pub mod metrics;
pub mod rollout;

pub use episode::{evaluate, play_episode, EpisodeTrace, Experience};
pub use metrics::{EpisodeResult, TrainingMetrics};
pub use rollout::{Rollout, RolloutConfig};
