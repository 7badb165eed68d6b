use crate::ai::Agent;
use crate::env::{Observation, TatetiEnv};
use crate::error::EnvError;
use crate::game::{GameOutcome, Mark};
use crate::training::metrics::EpisodeResult;

/// A single step of experience for RL training, in the flat form an external
/// learner consumes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Experience {
    pub observation: Observation,
    pub action: usize,
    pub reward: f32,
    pub next_observation: Observation,
    pub done: bool,
}

/// Result of driving a single episode.
pub struct EpisodeTrace {
    pub experiences: Vec<Experience>,
    pub result: EpisodeResult,
}

/// Drive one episode: reset, then step with the agent's actions until the
/// environment reports a terminal outcome. Rejected moves are recorded like
/// any other step, with their zero reward.
pub fn play_episode(
    env: &mut TatetiEnv,
    agent: &mut dyn Agent,
) -> Result<EpisodeTrace, EnvError> {
    let mut observation = env.reset();
    let mut experiences = Vec::new();
    let mut total_reward = 0.0;
    let mut rejected_moves = 0;

    loop {
        let action = agent.select_action(env.state(), true);
        let step = env.step(action)?;

        experiences.push(Experience {
            observation,
            action,
            reward: step.reward,
            next_observation: step.observation,
            done: step.done,
        });

        total_reward += step.reward;
        if step.info.rejected {
            rejected_moves += 1;
        }
        observation = step.observation;

        if step.done {
            break;
        }
    }

    let winner = match env.state().outcome() {
        Some(GameOutcome::Winner(mark)) => Some(mark),
        _ => None,
    };

    let game_length = experiences.len();
    Ok(EpisodeTrace {
        experiences,
        result: EpisodeResult {
            winner,
            game_length,
            total_reward,
            rejected_moves,
        },
    })
}

/// Win rate for the agent (X) over N episodes.
pub fn evaluate(
    env: &mut TatetiEnv,
    agent: &mut dyn Agent,
    games: usize,
) -> Result<f32, EnvError> {
    if games == 0 {
        return Ok(0.0);
    }
    let mut wins = 0;
    for _ in 0..games {
        let trace = play_episode(env, agent)?;
        if trace.result.winner == Some(Mark::X) {
            wins += 1;
        }
    }
    Ok(wins as f32 / games as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::env::RewardConfig;

    #[test]
    fn test_play_episode_terminates() {
        let mut env = TatetiEnv::from_seed(RewardConfig::default(), 11);
        let mut agent = RandomAgent::from_seed(5);
        let trace = play_episode(&mut env, &mut agent).unwrap();

        assert!(!trace.experiences.is_empty());
        assert!(trace.result.game_length <= 5);
        assert!(trace.experiences.last().unwrap().done);
    }

    #[test]
    fn test_legal_policy_is_never_rejected() {
        let mut env = TatetiEnv::from_seed(RewardConfig::default(), 11);
        let mut agent = RandomAgent::from_seed(5);
        for _ in 0..20 {
            let trace = play_episode(&mut env, &mut agent).unwrap();
            assert_eq!(trace.result.rejected_moves, 0);
        }
    }

    #[test]
    fn test_total_reward_sums_the_steps() {
        let mut env = TatetiEnv::from_seed(RewardConfig::default(), 11);
        let mut agent = RandomAgent::from_seed(5);
        let trace = play_episode(&mut env, &mut agent).unwrap();

        let sum: f32 = trace.experiences.iter().map(|e| e.reward).sum();
        assert_eq!(trace.result.total_reward, sum);
    }

    #[test]
    fn test_experiences_chain_observations() {
        let mut env = TatetiEnv::from_seed(RewardConfig::default(), 11);
        let mut agent = RandomAgent::from_seed(5);
        let trace = play_episode(&mut env, &mut agent).unwrap();

        for pair in trace.experiences.windows(2) {
            assert_eq!(pair[0].next_observation, pair[1].observation);
        }
    }

    #[test]
    fn test_evaluate_returns_a_rate() {
        let mut env = TatetiEnv::from_seed(RewardConfig::default(), 11);
        let mut agent = RandomAgent::from_seed(5);
        let rate = evaluate(&mut env, &mut agent, 50).unwrap();
        assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn test_experience_serializes_to_json() {
        let exp = Experience {
            observation: [0; 9],
            action: 4,
            reward: -1.0,
            next_observation: [0, 0, 0, 0, 1, 0, 0, 2, 0],
            done: false,
        };
        let json = serde_json::to_string(&exp).unwrap();
        let back: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(back.action, 4);
        assert_eq!(back.next_observation[4], 1);
    }
}
