use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState, _training: bool) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Mark};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial();
        state.apply_move_mut(4, Mark::X).unwrap();
        state.apply_move_mut(0, Mark::O).unwrap();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state, false);
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut a = RandomAgent::from_seed(3);
        let mut b = RandomAgent::from_seed(3);
        let state = GameState::initial();
        for _ in 0..20 {
            assert_eq!(
                a.select_action(&state, false),
                b.select_action(&state, false)
            );
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut x = RandomAgent::from_seed(1);
        let mut o = RandomAgent::from_seed(2);
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let (action, mark) = if turn % 2 == 0 {
                (x.select_action(&state, false), Mark::X)
            } else {
                (o.select_action(&state, false), Mark::O)
            };
            state = state.apply_move(action, mark).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
