use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and arena runs.
    pub fn with_seed(seed: u64) -> Self {
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
    fn select_action(&mut self, state: &GameState) -> usize {
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
    use crate::game::GameState;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state);
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state)
            } else {
                agent2.select_action(&state)
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_seeded_agents_repeat() {
        let state = GameState::initial();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_action(&state), b.select_action(&state));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
