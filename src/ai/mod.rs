//! Move selection: the threat heuristic, the averaging lookahead, the
//! top-level column policy, and the agents that wrap it.

mod agent;
pub mod heuristic;
mod random;
pub mod search;
pub mod selector;

pub use agent::Agent;
pub use heuristic::{rate_board, Heuristic, ThreatHeuristic};
pub use random::RandomAgent;
pub use search::{search_value, Search};
pub use selector::{choose_column, rank_columns, HeuristicAgent};
